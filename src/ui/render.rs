//! Plain-text rendering of a [`DirectoryView`].

use crate::forms::{ClubForm, RequestForm};
use crate::service::app_state::{ClubCard, DirectoryView, Modal, Results, TagChip};
use crate::types::{Club, DiscoverMode, Vendor, VendorRequest};
use std::fmt::Write;

fn join(list: &[String]) -> String {
    list.join(", ")
}

fn mode_bar(current: DiscoverMode) -> String {
    DiscoverMode::ALL
        .iter()
        .map(|m| {
            if *m == current {
                format!("[{m}]")
            } else {
                format!(" {m} ")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn chip(c: &TagChip) -> String {
    if c.selected {
        format!("(#{})", c.tag)
    } else {
        format!("#{}", c.tag)
    }
}

fn club_card(out: &mut String, club: &Club, hearted: bool) {
    let heart = if hearted { "♥" } else { "♡" };
    let _ = writeln!(out, "  {heart} [{}] {}", club.id, club.name);
    if !club.description.is_empty() {
        let _ = writeln!(out, "      {}", club.description);
    }
    let tags: Vec<String> = club.tag_lists().cloned().collect();
    if !tags.is_empty() {
        let _ = writeln!(out, "      tags: {}", join(&tags));
    }
    if let Some(contact) = &club.contact {
        let _ = writeln!(out, "      contact: {contact}");
    }
}

fn vendor_card(out: &mut String, v: &Vendor) {
    let _ = writeln!(out, "  [{}] {} {}", v.id, v.name, v.price_range);
    if !v.description.is_empty() {
        let _ = writeln!(out, "      {}", v.description);
    }
    if !v.services.is_empty() {
        let _ = writeln!(out, "      services: {}", join(&v.services));
    }
    if !v.availability.is_empty() {
        let _ = writeln!(out, "      available: {}", join(&v.availability));
    }
    if let Some(contact) = &v.contact {
        let _ = writeln!(out, "      contact: {contact}");
    }
}

fn request_card(out: &mut String, r: &VendorRequest) {
    let _ = writeln!(out, "  [{}] {} ({})", r.id, r.title, r.club_name);
    if !r.description.is_empty() {
        let _ = writeln!(out, "      {}", r.description);
    }
    if !r.needs.is_empty() {
        let _ = writeln!(out, "      needs: {}", join(&r.needs));
    }
    let when: Vec<&str> = [r.date.as_str(), r.time_window.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    if !when.is_empty() || !r.budget.is_empty() {
        let _ = writeln!(out, "      when: {}  budget: {}", when.join(" "), r.budget);
    }
    if let Some(contact) = &r.contact {
        let _ = writeln!(out, "      contact: {contact}");
    }
}

fn form_lines(out: &mut String, fields: &[(&str, &String)]) {
    for (name, value) in fields {
        let _ = writeln!(out, "  | {name:<12} {value}");
    }
}

fn modal(out: &mut String, modal: &Modal) {
    match modal {
        Modal::RegisterClub(ClubForm {
            name,
            description,
            interests,
            vibes,
            collab_needs,
            contact,
        }) => {
            let _ = writeln!(out, "  +-- register a club (name required) --");
            form_lines(
                out,
                &[
                    ("name", name),
                    ("description", description),
                    ("interests", interests),
                    ("vibes", vibes),
                    ("collab_needs", collab_needs),
                    ("contact", contact),
                ],
            );
        }
        Modal::PostRequest(RequestForm {
            club_name,
            title,
            description,
            needs,
            budget,
            date,
            time_window,
            contact,
        }) => {
            let _ = writeln!(out, "  +-- post a request (club_name, title required) --");
            form_lines(
                out,
                &[
                    ("club_name", club_name),
                    ("title", title),
                    ("description", description),
                    ("needs", needs),
                    ("budget", budget),
                    ("date", date),
                    ("time_window", time_window),
                    ("contact", contact),
                ],
            );
        }
    }
    let _ = writeln!(out, "  +-- set <field> <value> | submit | close");
}

pub fn render(view: &DirectoryView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", mode_bar(view.mode));
    if !view.query.trim().is_empty() {
        let _ = writeln!(out, "search: {}", view.query.trim());
    }
    if !view.chips.is_empty() {
        let chips: Vec<String> = view.chips.iter().map(chip).collect();
        let _ = writeln!(out, "discover: {}", chips.join(" "));
    }

    if !view.hearted.is_empty() {
        let _ = writeln!(out, "\nhearted ({})", view.hearted.len());
        for club in &view.hearted {
            club_card(&mut out, club, true);
        }
    }

    let _ = writeln!(out, "\n{} ({})", view.mode, view.results.len());
    match &view.results {
        Results::Clubs(cards) => {
            for ClubCard { club, hearted } in cards {
                club_card(&mut out, club, *hearted);
            }
        }
        Results::Vendors(vendors) => vendors.iter().for_each(|v| vendor_card(&mut out, v)),
        Results::Requests(requests) => requests.iter().for_each(|r| request_card(&mut out, r)),
    }
    if view.results.is_empty() {
        let _ = writeln!(out, "  nothing matches");
    }

    if let Some(m) = &view.modal {
        let _ = writeln!(out);
        modal(&mut out, m);
    }
    out
}
