//! Diesel schema for author persistence.

diesel::table! {
    /// Author records.
    authors (id) {
        /// Storage-assigned identifier.
        id -> Int8,
        /// Author name, unique on `lower(name)`.
        name -> Varchar,
        /// Phone number as entered.
        phone_number -> Varchar,
        /// Creation timestamp, defaulted by the database.
        created_at -> Timestamptz,
        /// Latest update timestamp, maintained by trigger.
        updated_at -> Nullable<Timestamptz>,
    }
}
