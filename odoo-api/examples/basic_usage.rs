//! # Odoo API basic usage
//!
//! Connects to an Odoo server, lists a few company partners, creates one
//! record and updates it.
//!
//! ## Usage
//!
//! Provide the connection settings through the environment, then run the
//! example:
//! ```bash
//! export ODOO_URL=https://erp.example.com
//! export ODOO_DB=mydb
//! export ODOO_USERNAME=admin
//! export ODOO_PASSWORD=secret
//! cargo run --example basic_usage
//! ```
//!
//! Set `ODOO_LOG_MODE=development` to see the request/response events.

use odoo_api::{logging, CallOptions, ClientConfig, Domain, OdooClient, Record, Value};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging_from_env()?;

    let client = OdooClient::connect(ClientConfig::from_env()?)?;
    println!("Authenticated as uid {}", client.uid());

    // Query through the model-bound handle
    let partner = client.model("res.partner");

    let companies = partner.search_read(
        Domain::new().filter("is_company", "=", true),
        &["name", "country_id"],
        CallOptions::new().limit(5).order("name asc"),
    )?;

    println!("First {} companies:", companies.len());
    for record in &companies {
        let name = record
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("<unnamed>");
        println!("  - {name}");
    }

    // Create and update a record
    let mut values = Record::new();
    values.insert("name".to_string(), Value::from("SDK Example Partner"));
    let id = partner.create(values)?;
    println!("Created partner {id}");

    let mut update = Record::new();
    update.insert("comment".to_string(), Value::from("created by basic_usage"));
    partner.write(&[id], update)?;
    println!("Updated partner {id}");

    Ok(())
}
