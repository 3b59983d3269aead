//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered accounts. `username` carries a unique index.
    users (id) {
        id -> Uuid,
        username -> Varchar,
        name -> Varchar,
        /// PHC-formatted Argon2id hash.
        password_hash -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Blog list entries.
    blogs (id) {
        id -> Uuid,
        title -> Varchar,
        author -> Varchar,
        url -> Varchar,
        likes -> Int8,
        /// Creating user; cleared when that user is removed.
        user_id -> Nullable<Uuid>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Phonebook entries. `name` carries a unique index.
    contacts (id) {
        id -> Uuid,
        name -> Varchar,
        number -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(blogs -> users (user_id));
diesel::allow_tables_to_appear_in_same_query!(blogs, contacts, users);
