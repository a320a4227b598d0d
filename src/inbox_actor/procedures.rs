//! Procedures of the inbox table.

/// Remote procedures run against one inbox.
#[derive(Debug, Clone)]
pub enum InboxProcedure {
    /// Appends an unread entry.
    Push { title: String, body: String },
    UnreadCount,
    /// Marks one entry read. Marking an already-read entry is a no-op.
    MarkRead(u32),
    MarkAllRead,
    /// All entries, newest first.
    Entries,
}

/// Results of [`InboxProcedure`]s; variants match 1:1.
#[derive(Debug, Clone, PartialEq)]
pub enum InboxOutput {
    /// Id of the new entry.
    Push(u32),
    UnreadCount(usize),
    MarkRead(()),
    /// How many entries changed from unread to read.
    MarkAllRead(usize),
    Entries(Vec<crate::model::FeedEntry>),
}
