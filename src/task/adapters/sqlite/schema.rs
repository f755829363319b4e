//! Diesel schema for task persistence.

diesel::table! {
    /// Persisted to-do records.
    todos (id) {
        /// Store-assigned task identifier.
        id -> BigInt,
        /// Task title.
        title -> Text,
        /// Optional free-text description.
        description -> Nullable<Text>,
        /// Category label.
        category -> Text,
        /// Optional daily due time as `HH:MM` text.
        due_time -> Nullable<Text>,
        /// Completion flag, stored as 0/1.
        is_completed -> Bool,
    }
}
