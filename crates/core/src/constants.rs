//! Constants used throughout the notes core crate.
//!
//! Connection defaults, collection naming and the fixed seed content live here
//! so the server, the CLI and the tests agree on them.

/// Connection string used when `MONGODB_URI` is not set.
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017/notes-app";

/// Database used when the connection string does not name one.
pub const DEFAULT_DATABASE_NAME: &str = "notes-app";

/// Collection holding note documents.
pub const NOTES_COLLECTION_NAME: &str = "notes";

/// Maximum number of characters in a note title.
pub const MAX_TITLE_CHARS: usize = 100;

/// Message returned when a title or content is missing or empty.
pub const MISSING_FIELDS_MESSAGE: &str = "Title and content are required";

/// Message returned when a title exceeds [`MAX_TITLE_CHARS`].
pub const TITLE_TOO_LONG_MESSAGE: &str = "Title cannot be more than 100 characters";

/// Default notes inserted into an empty collection, as `(title, content)` in insertion order.
pub const DEFAULT_NOTES: [(&str, &str); 3] = [
    (
        "Welcome to Notes App",
        "This is a sample note to help you get started. You can edit or delete this note, or create new ones of your own!",
    ),
    (
        "Using MongoDB",
        "Your notes are now stored in MongoDB! This means your data persists between sessions and can be accessed from anywhere. Try adding some notes and see how they're saved automatically.",
    ),
    (
        "Tips for Organizing Notes",
        "Here are some tips for keeping your notes organized:\n\n- Use clear, descriptive titles\n- Keep notes concise and focused on a single topic\n- Review and update your notes regularly\n- Delete notes you no longer need",
    ),
];
