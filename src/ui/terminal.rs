use crate::error::ClubHubError;
use crate::forms::FormError;
use crate::service::DispatchOutcome;
use crate::service::directory_actor::DirectoryHandle;
use crate::ui::command::{self, Command, HELP};
use crate::ui::render::render;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

/// Read commands line by line from `input`, dispatch them, and write a fresh
/// render to `output` after each one. Returns on `quit` or end of input.
/// Bytes that are not valid UTF-8 are replaced rather than ending the session.
pub async fn run<R, W>(
    handle: &DirectoryHandle,
    mut input: R,
    mut output: W,
) -> Result<(), ClubHubError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    write_view(handle, &mut output).await?;

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        match command::parse(line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => {
                output.write_all(HELP.as_bytes()).await?;
                output.write_all(b"\n> ").await?;
            }
            Ok(Command::Refresh) => write_view(handle, &mut output).await?,
            Ok(Command::Event(event)) => {
                let outcome = handle.dispatch(event).await?;
                debug!(?outcome, "event handled");
                // A missing required field stays silent; a mistyped field name is reported.
                if let DispatchOutcome::Rejected(e @ FormError::UnknownField(_)) = &outcome {
                    output
                        .write_all(format!("{e} (try `help`)\n").as_bytes())
                        .await?;
                }
                write_view(handle, &mut output).await?;
            }
            Err(e) if e.is_input_error() => {
                output.write_all(format!("{e} (try `help`)\n> ").as_bytes()).await?;
            }
            Err(e) => return Err(e),
        }
        output.flush().await?;
    }

    info!("input closed; leaving directory");
    Ok(())
}

async fn write_view<W: AsyncWrite + Unpin>(
    handle: &DirectoryHandle,
    output: &mut W,
) -> Result<(), ClubHubError> {
    let view = handle.view().await?;
    output.write_all(render(&view).as_bytes()).await?;
    output.write_all(b"> ").await?;
    output.flush().await?;
    Ok(())
}
