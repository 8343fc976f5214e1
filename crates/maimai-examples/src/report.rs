//! Text and JSON rendering of resolved controllers

use std::fmt::Write;

use maimai_core::metadata::{ClassRef, ComponentRef};
use maimai_core::reflection::Reflector;
use serde_json::{json, Value};

fn names(refs: &[ComponentRef]) -> String {
    let names: Vec<&str> = refs.iter().map(ComponentRef::name).collect();
    format!("[{}]", names.join(", "))
}

/// Route table and validation findings of each class, as text
pub fn render_text(reflector: &Reflector<'_>, classes: &[ClassRef]) -> String {
    let mut out = String::new();
    for &class in classes {
        let routes = reflector.controller_routes(class);
        let prefix = routes.controller.prefix.as_deref().unwrap_or("");
        let _ = writeln!(out, "{class} ({prefix})");

        for entry in reflector.route_table(class) {
            let _ = writeln!(
                out,
                "  {:<7} {:<24} -> {:<14} guards={} interceptors={} pipes={}",
                entry.method.as_str(),
                entry.full_path,
                entry.handler,
                names(&entry.guards),
                names(&entry.interceptors),
                names(&entry.pipes),
            );
        }

        let report = reflector.validate(class);
        if report.errors.is_empty() && report.warnings.is_empty() {
            let _ = writeln!(out, "  validation: ok");
        }
        for error in &report.errors {
            let _ = writeln!(out, "  error: {error}");
        }
        for warning in &report.warnings {
            let _ = writeln!(out, "  warning: {warning}");
        }
    }
    out
}

/// Route table and validation findings of each class, as JSON
pub fn render_json(reflector: &Reflector<'_>, classes: &[ClassRef]) -> serde_json::Result<Value> {
    let mut controllers = Vec::with_capacity(classes.len());
    for &class in classes {
        controllers.push(json!({
            "class": class,
            "controller": reflector.controller_routes(class).controller,
            "routes": serde_json::to_value(reflector.route_table(class))?,
            "validation": serde_json::to_value(reflector.validate(class))?,
        }));
    }
    Ok(Value::Array(controllers))
}
