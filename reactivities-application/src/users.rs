use super::*;

pub fn register_user(connections: &sqlite::Connections, new_user: usecases::NewUser) -> Result<User> {
    let username = new_user.username.clone();
    let user = connections.exclusive()?.transaction(|conn| {
        usecases::register_user(conn, new_user).map_err(|err| {
            warn!("Failed to register user '{}': {}", username, err);
            err
        })
    })?;
    info!("Registered new user '{}'", user.username);
    Ok(user)
}

pub fn edit_profile(
    connections: &sqlite::Connections,
    username: &str,
    update: usecases::ProfileUpdate,
) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::edit_profile(conn, username, update).map_err(|err| {
            warn!("Failed to edit profile of '{}': {}", username, err);
            err
        })
    })?)
}
