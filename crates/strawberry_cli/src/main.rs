//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `strawberry_core` linkage and engine wiring from the environment.
//! - Run one create/get/list/delete cycle and print results as JSON lines.

use chrono::Utc;
use log::error;
use std::error::Error;
use std::process::ExitCode;
use strawberry_core::{
    core_version, init_logging, ping, Location, RegistryConfig, Resource, ResourceService,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_run module=cli status=error error={err}");
            eprintln!("strawberry_cli failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    println!("strawberry_core ping={}", ping());
    println!("strawberry_core version={}", core_version());

    let config = RegistryConfig::from_env()?;
    if let Some(log_dir) = config.log_dir.as_deref().and_then(|dir| dir.to_str()) {
        init_logging(&config.log_level, log_dir)?;
    }
    println!("strawberry_core engine={}", config.engine);

    let service = ResourceService::new(config.open_engine()?);

    let probe = Resource::new(
        "probe",
        "cli smoke resource",
        Location::new(0.0, 0.0),
        Utc::now(),
    );
    let id = service.create_resource(probe)?;
    println!("{}", serde_json::json!({ "resourceID": id }));

    let resource = service.get_resource(&id)?;
    println!("{}", serde_json::json!({ "resource": resource }));

    let list = service.list_resources(0)?;
    println!("{}", serde_json::json!({ "list": list }));

    service.delete_resource(&id)?;
    match service.get_resource(&id) {
        Err(err) if err.is_not_found() => {
            println!("{}", serde_json::json!({ "error": err.to_string() }));
        }
        Err(err) => return Err(err.into()),
        Ok(_) => return Err(format!("resource {id} still present after delete").into()),
    }

    Ok(())
}
