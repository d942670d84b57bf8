use carpark::commands::{CmdMessage, CmdResult, MessageLevel};
use carpark::error::CarparkError;
use carpark::index::{DisplayCarpark, DisplayIndex};
use carpark::model::Carpark;
use colored::Colorize;

const SELECTED_MARKER: &str = "▸";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_error(err: &CarparkError) {
    print_messages(&[CmdMessage::error(err.to_string())]);
}

pub(super) fn print_carparks(carparks: &[DisplayCarpark], highlight: Option<DisplayIndex>) {
    for dp in carparks {
        let selected = highlight == Some(dp.index);
        let marker = if selected { SELECTED_MARKER } else { " " };
        let idx = format!("{:>3}.", dp.index);
        let line = summary_line(&dp.carpark);
        if selected {
            println!("{} {} {}", marker.yellow(), idx.yellow(), line.bold());
        } else {
            println!("{} {} {}", marker, idx, line);
        }
    }
}

fn summary_line(carpark: &Carpark) -> String {
    let mut tags = Vec::new();
    if carpark.night_parking {
        tags.push("night");
    }
    if carpark.free_parking {
        tags.push("free");
    }
    if tags.is_empty() {
        format!("{:<6} {}", carpark.code, carpark.address)
    } else {
        format!("{:<6} {} [{}]", carpark.code, carpark.address, tags.join(", "))
    }
}

pub(super) fn print_details(carpark: &Carpark) {
    println!("{} {}", carpark.code.to_string().yellow(), carpark.address.bold());
    println!("--------------------------------");
    println!("Coordinates:   {}", carpark.coordinates);
    println!("Total lots:    {}", carpark.total_lots);
    let car_types: Vec<String> = carpark.car_types.iter().map(|t| t.to_string()).collect();
    println!("Car types:     {}", or_none(&car_types.join(", ")));
    println!("Night parking: {}", yes_no(carpark.night_parking));
    println!("Free parking:  {}", yes_no(carpark.free_parking));
    if carpark.parking_windows.is_empty() {
        println!("Parking hours: {}", "none".dimmed());
    } else {
        println!("Parking hours:");
        for window in &carpark.parking_windows {
            println!("  {}", window);
        }
    }
}

pub(super) fn print_history(result: &CmdResult) {
    for (i, entry) in result.history.iter().enumerate() {
        println!("{:>4}  {}", (i + 1).to_string().dimmed(), entry);
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn or_none(s: &str) -> &str {
    if s.is_empty() {
        "none"
    } else {
        s
    }
}
