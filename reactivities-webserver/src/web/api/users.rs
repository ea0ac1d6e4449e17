use super::*;

#[post("/user/login", format = "application/json", data = "<login>")]
pub fn post_login(
    db: &State<sqlite::Connections>,
    login: JsonResult<json::Credentials>,
    jwt_state: &State<jwt::JwtState>,
) -> Result<json::User> {
    let login = login?.into_inner();
    let email = login
        .email
        .parse::<EmailAddress>()
        .map_err(|_| ParameterError::Credentials)?;
    let credentials = usecases::Credentials {
        email: &email,
        password: &login.password,
    };
    let user = usecases::login_with_email(&db.shared()?, &credentials).map_err(|err| {
        debug!("Login with email '{}' failed: {}", login.email, err);
        err
    })?;
    let token = jwt_state.generate_token(&user.user.username)?;
    Ok(Json(to_json::user(user, token)))
}

#[post("/user/register", format = "application/json", data = "<new_user>")]
pub fn post_register(
    db: &State<sqlite::Connections>,
    new_user: JsonResult<json::NewUser>,
    jwt_state: &State<jwt::JwtState>,
) -> Result<json::User> {
    let new_user = from_json::new_user(new_user?.into_inner());
    let user = flows::register_user(db, new_user)?;
    let token = jwt_state.generate_token(&user.username)?;
    // A new user has no photos yet
    let user = usecases::UserWithImage { user, image: None };
    Ok(Json(to_json::user(user, token)))
}

#[get("/user")]
pub fn get_current_user(
    db: &State<sqlite::Connections>,
    account: Account,
    jwt_state: &State<jwt::JwtState>,
) -> Result<json::User> {
    let user = usecases::get_current_user(&db.shared()?, account.username())?;
    let token = jwt_state.generate_token(&user.user.username)?;
    Ok(Json(to_json::user(user, token)))
}

#[post("/user/logout")]
pub fn post_logout(auth: Auth, jwt_state: &State<jwt::JwtState>) -> Result<()> {
    let username = auth.account()?;
    for bearer in auth.bearer_tokens() {
        jwt_state.blacklist_token(bearer.to_owned());
    }
    debug!("User '{username}' logged out");
    Ok(Json(()))
}
