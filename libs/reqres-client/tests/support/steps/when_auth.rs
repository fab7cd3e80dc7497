use cucumber::when;

use reqres_client::models::Credentials;

use crate::support::world::TestWorld;

async fn login(world: &mut TestWorld, credentials: Credentials) {
    let response = world
        .client()
        .login(&credentials)
        .await
        .expect("login request should complete");
    world.response = Some(response);
}

#[when(expr = "I register with email {string} and password {string}")]
pub async fn register(world: &mut TestWorld, email: String, password: String) {
    let response = world
        .client()
        .register(&Credentials::new(email, password))
        .await
        .expect("register request should complete");
    world.response = Some(response);
}

#[when(expr = "I log in with email {string} and password {string}")]
pub async fn login_with_both(world: &mut TestWorld, email: String, password: String) {
    login(world, Credentials::new(email, password)).await;
}

#[when(expr = "I log in with only the email {string}")]
pub async fn login_email_only(world: &mut TestWorld, email: String) {
    login(world, Credentials::email_only(email)).await;
}

#[when(expr = "I log in with only the password {string}")]
pub async fn login_password_only(world: &mut TestWorld, password: String) {
    login(world, Credentials::password_only(password)).await;
}
