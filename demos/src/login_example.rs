use dotenv::dotenv;
use ngo_crm::prelude::*;
use std::env;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Load NGO_CRM_BACKEND_URL and credentials from .env
    dotenv().ok();
    pretty_env_logger::init();

    let email = env::var("NGO_CRM_EMAIL").expect("NGO_CRM_EMAIL must be set");
    let password = env::var("NGO_CRM_PASSWORD").expect("NGO_CRM_PASSWORD must be set");

    let crm = Crm::from_env()?;
    println!("Starting login example against {}", crm.config().base_url);

    let login = crm.login_page();
    match login.submit(&email, &password).await {
        Ok(Some(route)) => println!("Signed in, heading to {}", route),
        Ok(None) => println!("Signed in; this role has no dashboard"),
        Err(err) => println!("Login failed: {}", err),
    }

    // A reload keeps the cookie but loses the in-memory identity
    crm.identity().clear();
    if let Some(identity) = crm.verify().await {
        println!(
            "Session restored for {} ({}) in {}",
            identity.full_name, identity.role, identity.country_name
        );
    }

    for toast in crm.toasts().drain() {
        println!("[{:?}] {}", toast.level, toast.message);
    }

    println!("Login example completed");
    Ok(())
}
