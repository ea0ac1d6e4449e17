#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix and the activity
// date are stored as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users, treat_none_as_null = true)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub username: &'a str,
    pub display_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub bio: Option<&'a str>,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub rowid: i64,
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub email: String,
    pub password: String,
    pub bio: Option<String>,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = activities)]
pub struct NewActivity<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub category: &'a str,
    pub date: i64,
    pub city: &'a str,
    pub venue: &'a str,
}

#[derive(Queryable)]
pub struct ActivityEntity {
    pub rowid: i64,
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: i64,
    pub city: String,
    pub venue: String,
}

#[derive(Insertable)]
#[diesel(table_name = attendances)]
pub struct NewAttendance {
    pub activity_rowid: i64,
    pub user_rowid: i64,
    pub is_host: bool,
    pub joined_at: i64,
}

#[derive(Queryable)]
pub struct JoinedAttendance {
    pub is_host: bool,
    pub joined_at: i64,
    // Joined columns
    pub activity_id: String,
    pub username: String,
}

#[derive(Insertable)]
#[diesel(table_name = photos)]
pub struct NewPhoto<'a> {
    pub id: &'a str,
    pub user_rowid: i64,
    pub url: &'a str,
    pub is_main: bool,
}

#[derive(Queryable)]
pub struct JoinedPhoto {
    pub id: String,
    pub url: String,
    pub is_main: bool,
    // Joined columns
    pub username: String,
}

#[derive(Insertable)]
#[diesel(table_name = comments)]
pub struct NewComment<'a> {
    pub id: &'a str,
    pub activity_rowid: i64,
    pub author_rowid: i64,
    pub body: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct JoinedComment {
    pub id: String,
    pub body: String,
    pub created_at: i64,
    // Joined columns
    pub activity_id: String,
    pub author: String,
}
