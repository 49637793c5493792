//! Fields may or may not be sent; presence has to be checked explicitly.

use models::FormData;
use services::parse;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A partially filled form
    let mut form = FormData::new();
    form.append("username", "alice");

    let data = parse(&form).into_result()?;

    match data.get("email") {
        None => println!("email was not provided"),
        Some(email) => {
            let email = email.as_text().ok_or("expected email to be text")?;
            println!("email: {}", email.to_lowercase());
        }
    }

    let username = data
        .get("username")
        .and_then(|v| v.as_text())
        .ok_or("expected username to be text")?;
    println!("username: {}", username.to_uppercase());
    Ok(())
}
