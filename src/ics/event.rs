use std::vec;

/// One committed calendar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    /// Owning user; `None` for entries from the public-holiday source.
    pub user: Option<String>,
    /// Project name or holiday title.
    pub subject: String,
    /// UNIX seconds, `start <= end` once committed.
    pub start: i64,
    pub end: i64,
    /// Source used a date-only representation (vacation/holiday).
    pub dayevent: bool,
    /// Reapplied to every year regardless of its literal year.
    pub recurring_yearly: bool,
    /// A location marker was present.
    pub onsite: bool,
}

/// The committed, time-ordered event list for one report run.
///
/// Order ascending by `start` is maintained at insertion. Day-events of one
/// user never overlap or touch: such ranges are merged into one span when
/// inserted, so consecutive or overlapping vacation declarations count once.
#[derive(Debug, Default)]
pub struct EventStore {
    entries: Vec<CalendarEvent>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a committed event, merging or splicing as required.
    ///
    /// Same-user day-events with overlapping or adjacent `[start, end]`
    /// ranges extend the existing entry to the union and drop the new one.
    /// Otherwise the event is spliced before the first entry whose start is
    /// equal or greater, keeping the list sorted without a re-sort pass.
    pub fn insert(&mut self, event: CalendarEvent) {
        for existing in self.entries.iter_mut() {
            if existing.user == event.user && event.dayevent && existing.dayevent {
                let overlaps = (existing.start <= event.start && event.start <= existing.end)
                    || (existing.start <= event.end && event.end <= existing.end);
                if overlaps {
                    existing.start = existing.start.min(event.start);
                    existing.end = existing.end.max(event.end);
                    return;
                }
            }
        }

        let position = self
            .entries
            .iter()
            .position(|existing| event.start <= existing.start)
            .unwrap_or(self.entries.len());
        self.entries.insert(position, event);
    }

    /// Keeps only timed events whose subject starts with `project`.
    ///
    /// Applied before aggregation when the report is scoped to one project;
    /// vacations and holidays carry no project and are dropped as well.
    pub fn retain_project(&mut self, project: &str) {
        self.entries.retain(|event| !event.dayevent && event.subject.starts_with(project));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CalendarEvent> {
        self.entries.iter()
    }
}

impl IntoIterator for EventStore {
    type Item = CalendarEvent;
    type IntoIter = vec::IntoIter<CalendarEvent>;

    /// The aggregation pass consumes the store; it is not reusable after.
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
