//! Basic fields, the validation guard, and explicit narrowing of values.

use models::FormData;
use services::parse;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut form = FormData::new();
    form.append("name", "Alice");
    form.append("age", "20");

    // Any issue means no data at all
    let data = parse(&form).into_result()?;

    // Values are text or files; nothing is converted for you
    let name = data
        .get("name")
        .and_then(|v| v.as_text())
        .ok_or("expected name to be text")?;
    let age: u32 = data
        .get("age")
        .and_then(|v| v.as_text())
        .ok_or("expected age to be text")?
        .parse()?;

    println!("{} is {} years old", name.to_uppercase(), age);
    Ok(())
}
