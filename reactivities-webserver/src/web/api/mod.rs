use std::{fmt::Display, result};

use reactivities_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, delete, get,
    http::Status,
    post, put,
    response::{self, Responder},
    routes, Route, State,
};

use super::guards::*;
use crate::{
    adapters::json::{self, from_json, to_json},
    core::{prelude::*, usecases},
    web::{jwt, sqlite},
};
use reactivities_application::prelude as flows;
use reactivities_core::usecases::Error as ParameterError;

mod activities;
mod error;
mod photos;
mod profiles;
mod users;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   users   --- //
        users::post_login,
        users::post_register,
        users::get_current_user,
        users::post_logout,
        // ---   activities   --- //
        activities::get_activities,
        activities::get_activity,
        activities::post_activity,
        activities::put_activity,
        activities::delete_activity,
        activities::post_attend,
        activities::delete_attend,
        // ---   profiles   --- //
        profiles::get_profile,
        profiles::put_profile,
        // ---   photos   --- //
        photos::post_photo,
        photos::delete_photo,
        photos::post_main_photo,
        // ---   util   --- //
        util::get_version,
    ]
}

pub(crate) fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
