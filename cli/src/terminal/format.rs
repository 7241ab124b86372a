use colored::*;
use hexwatch_common::network::status::Status;
use hexwatch_common::network::target::Target;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn target_details(target: &Target, status: Status) -> Vec<Detail> {
    vec![
        ("Host".to_string(), target.host.color(colors::ENDPOINT)),
        ("Port".to_string(), target.port.to_string().color(colors::ENDPOINT)),
        ("Service".to_string(), service(&target.service)),
        ("Status".to_string(), status_label(status)),
    ]
}

pub fn status_label(status: Status) -> ColoredString {
    status.label().color(colors::status(status)).bold()
}

fn service(label: &str) -> ColoredString {
    if label.is_empty() {
        "-".dimmed()
    } else {
        label.normal()
    }
}
