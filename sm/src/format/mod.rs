//! Section extraction and document rendering
//!
//! Turns free-form model output into a sectioned meeting document before it
//! is pushed to Notion. Each recognized meeting type is a table of
//! [`RegionSpec`] records consumed by the generic scanner in [`regions`];
//! extraction is a best-effort heuristic, so input without recognizable
//! headers degrades to placeholder sections rather than failing.

mod regions;

pub use regions::{Capture, Listing, Presence, RegionSpec, ScannedRegion, scan};

use tracing::debug;

use crate::meeting::MeetingType;

/// Rendered in place of extracted items when a region yields none
pub const NO_ITEMS_PLACEHOLDER: &str = "- No items recorded";

const EPICS_REGION: RegionSpec = RegionSpec {
    title: "Epics",
    headers: &["epic", "📌 sprint epics"],
    terminators: &["🚀", "final"],
    capture: Capture::Items,
    presence: Presence::Always,
    listing: Listing::Numbered,
    repeating: false,
};

const USER_STORY_REGION: RegionSpec = RegionSpec {
    title: "User Stories",
    headers: &["user story"],
    terminators: &["user story", "final", "🚀"],
    capture: Capture::Raw,
    presence: Presence::Always,
    listing: Listing::Numbered,
    repeating: true,
};

const PRIORITIZATION_REGION: RegionSpec = RegionSpec {
    title: "Final Sprint Prioritization",
    headers: &["final sprint prioritization"],
    terminators: &[],
    capture: Capture::Items,
    presence: Presence::Always,
    listing: Listing::Numbered,
    repeating: false,
};

/// Standup sections, each terminated by the headers of the sections that
/// follow it in the layout
const STANDUP_REGIONS: &[RegionSpec] = &[
    RegionSpec {
        title: "Done",
        headers: &["done"],
        terminators: &["in progress", "to do", "to-do", "todo", "blocker"],
        capture: Capture::Items,
        presence: Presence::Always,
        listing: Listing::Bulleted,
        repeating: false,
    },
    RegionSpec {
        title: "In Progress",
        headers: &["in progress"],
        terminators: &["to do", "to-do", "todo", "blocker"],
        capture: Capture::Items,
        presence: Presence::Always,
        listing: Listing::Bulleted,
        repeating: false,
    },
    RegionSpec {
        title: "To Do",
        headers: &["to do", "to-do", "todo"],
        terminators: &["blocker"],
        capture: Capture::Items,
        presence: Presence::Always,
        listing: Listing::Bulleted,
        repeating: false,
    },
    RegionSpec {
        title: "Blockers",
        headers: &["blocker"],
        terminators: &[],
        capture: Capture::Items,
        // Unlike the other three, Blockers is absence-sensitive
        presence: Presence::WhenFound,
        listing: Listing::Bulleted,
        repeating: false,
    },
];

const RETROSPECTIVE_REGIONS: &[RegionSpec] = &[
    RegionSpec {
        title: "What Went Well",
        headers: &["what went well"],
        terminators: &["what didn't go well", "what did not go well", "what changes", "action items"],
        capture: Capture::Items,
        presence: Presence::Always,
        listing: Listing::Numbered,
        repeating: false,
    },
    RegionSpec {
        title: "What Didn't Go Well",
        headers: &["what didn't go well", "what did not go well"],
        terminators: &["what changes", "action items"],
        capture: Capture::Items,
        presence: Presence::Always,
        listing: Listing::Numbered,
        repeating: false,
    },
    RegionSpec {
        title: "What Changes",
        headers: &["what changes", "action items"],
        terminators: &[],
        capture: Capture::Items,
        presence: Presence::Always,
        listing: Listing::Numbered,
        repeating: false,
    },
];

fn title_line(meeting: MeetingType, timestamp: &str) -> String {
    let emoji = match meeting {
        MeetingType::SprintPlanning => "📋",
        MeetingType::Standup => "🏃",
        MeetingType::Retrospective => "🔄",
    };
    format!("{} {} - {}", emoji, meeting.label(), timestamp)
}

/// Render raw model output as a sectioned document for a recognized meeting
/// type
///
/// Every always-present section renders its header even with nothing
/// extracted, using the placeholder line. Unrecognized meeting types bypass
/// this function; see [`generic_wrap`].
pub fn format_document(text: &str, meeting: MeetingType, timestamp: &str) -> String {
    debug!(%meeting, text_len = text.len(), "format_document: called");
    let mut doc = title_line(meeting, timestamp);
    doc.push('\n');

    match meeting {
        MeetingType::SprintPlanning => render_sprint_planning(text, &mut doc),
        MeetingType::Standup => render_regions(text, STANDUP_REGIONS, &mut doc),
        MeetingType::Retrospective => render_regions(text, RETROSPECTIVE_REGIONS, &mut doc),
    }

    doc
}

/// Fallback wrap for an unset or unrecognized meeting type: title line plus
/// the raw selected text
pub fn generic_wrap(content: &str, timestamp: &str) -> String {
    debug!(content_len = content.len(), "generic_wrap: called");
    format!("📝 Meeting Notes - {}\n\n{}\n", timestamp, content.trim_end())
}

fn render_regions(text: &str, specs: &[RegionSpec], doc: &mut String) {
    for spec in specs {
        let region = scan(text, spec);
        if spec.presence == Presence::WhenFound && !region.found {
            continue;
        }
        render_section(doc, spec.title, &region.entries, spec.listing);
    }
}

fn render_sprint_planning(text: &str, doc: &mut String) {
    render_section(doc, EPICS_REGION.title, &scan(text, &EPICS_REGION).entries, EPICS_REGION.listing);

    // Each captured story becomes its own numbered subsection; with none
    // captured the section header still appears with the placeholder
    let stories = scan(text, &USER_STORY_REGION);
    if stories.entries.is_empty() {
        render_section(doc, USER_STORY_REGION.title, &[], USER_STORY_REGION.listing);
    } else {
        for (i, story) in stories.entries.iter().enumerate() {
            doc.push('\n');
            doc.push_str(&format!("User Story {}:\n{}\n", i + 1, story));
        }
    }

    render_section(
        doc,
        PRIORITIZATION_REGION.title,
        &scan(text, &PRIORITIZATION_REGION).entries,
        PRIORITIZATION_REGION.listing,
    );
}

fn render_section(doc: &mut String, title: &str, entries: &[String], listing: Listing) {
    doc.push('\n');
    doc.push_str(title);
    doc.push_str(":\n");

    if entries.is_empty() {
        doc.push_str(NO_ITEMS_PLACEHOLDER);
        doc.push('\n');
        return;
    }

    for (i, entry) in entries.iter().enumerate() {
        match listing {
            Listing::Numbered => doc.push_str(&format!("{}. {}\n", i + 1, entry)),
            Listing::Bulleted => doc.push_str(&format!("- {}\n", entry)),
        }
    }
}
