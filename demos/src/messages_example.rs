use dotenv::dotenv;
use ngo_crm::prelude::*;
use std::env;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    pretty_env_logger::init();

    let crm = Crm::from_env()?;
    let email = env::var("NGO_CRM_EMAIL").expect("NGO_CRM_EMAIL must be set");
    let password = env::var("NGO_CRM_PASSWORD").expect("NGO_CRM_PASSWORD must be set");
    crm.login_page().submit(&email, &password).await?;
    let me = crm.identity().get().ok_or("not signed in")?;

    println!("Starting messages example as {}", me.full_name);
    println!("Unread total: {}", crm.messages().unread_total().await?);

    let mut directory = crm.messages_page();
    directory.load(&me.id).await;
    let contacts: Vec<(String, String, usize)> = directory
        .contacts()
        .into_iter()
        .map(|user| {
            (
                user.id.clone(),
                user.full_name.clone(),
                directory.unread_from(&user.id),
            )
        })
        .collect();
    for (_, name, unread) in &contacts {
        println!("  {:<24} {} unread", name, unread);
    }

    if let Some((partner_id, name, _)) = contacts.first() {
        let mut chat = crm.chat_page(&me.id, partner_id);
        chat.open().await;
        chat.send("Hello from the Rust client").await?;
        println!("\nConversation with {}", name);
        for message in chat.messages() {
            let who = if chat.is_mine(message) { "me" } else { name.as_str() };
            println!("  [{}] {}: {}", message.created_at, who, message.body);
        }
    }

    println!("Messages example completed");
    Ok(())
}
