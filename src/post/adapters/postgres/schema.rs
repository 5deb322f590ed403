//! Diesel schema for post persistence.

diesel::table! {
    /// Post records.
    posts (id) {
        /// Storage-assigned identifier.
        id -> Int8,
        /// Title containing a marker phrase.
        title -> Varchar,
        /// Optional body.
        content -> Nullable<Text>,
        /// Optional summary.
        summary -> Nullable<Text>,
        /// `Fiction` or `Non-Fiction`.
        #[max_length = 50]
        category -> Varchar,
        /// Creation timestamp, defaulted by the database.
        created_at -> Timestamptz,
        /// Latest update timestamp, maintained by trigger.
        updated_at -> Nullable<Timestamptz>,
    }
}
