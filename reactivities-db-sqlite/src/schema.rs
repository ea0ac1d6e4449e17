///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (rowid) {
        rowid -> BigInt,
        id -> Text,
        username -> Text,
        display_name -> Text,
        email -> Text,
        password -> Text,
        bio -> Nullable<Text>,
    }
}

table! {
    photos (rowid) {
        rowid -> BigInt,
        id -> Text,
        user_rowid -> BigInt,
        url -> Text,
        is_main -> Bool,
    }
}

joinable!(photos -> users (user_rowid));

///////////////////////////////////////////////////////////////////////
// Activities
///////////////////////////////////////////////////////////////////////

table! {
    activities (rowid) {
        rowid -> BigInt,
        id -> Text,
        title -> Text,
        description -> Text,
        category -> Text,
        date -> BigInt,
        city -> Text,
        venue -> Text,
    }
}

table! {
    attendances (activity_rowid, user_rowid) {
        activity_rowid -> BigInt,
        user_rowid -> BigInt,
        is_host -> Bool,
        joined_at -> BigInt,
    }
}

joinable!(attendances -> activities (activity_rowid));
joinable!(attendances -> users (user_rowid));

table! {
    comments (rowid) {
        rowid -> BigInt,
        id -> Text,
        activity_rowid -> BigInt,
        author_rowid -> BigInt,
        body -> Text,
        created_at -> BigInt,
    }
}

joinable!(comments -> activities (activity_rowid));
joinable!(comments -> users (author_rowid));

///////////////////////////////////////////////////////////////////////

allow_tables_to_appear_in_same_query!(activities, attendances, comments, photos, users,);
