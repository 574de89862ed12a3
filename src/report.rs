use colored::Colorize;

use crate::database::Event;
use crate::services::events::EventListing;
use crate::services::standings::Standing;

pub fn print_standings(standings: &[Standing]) {
    if standings.is_empty() {
        println!("No results recorded yet");
        return;
    }

    println!("{}", format!("{:>4}  {:<30} {:>6}", "#", "Player", "Points").bold());
    for (idx, standing) in standings.iter().enumerate() {
        let line = format!(
            "{:>4}  {:<30} {:>6}",
            idx + 1,
            standing.player_name,
            standing.total_points
        );
        if idx < 3 {
            println!("{}", line.green());
        } else {
            println!("{line}");
        }
    }
}

pub fn print_events(listing: &EventListing) {
    println!("{}", "Upcoming".bold());
    print_event_lines(&listing.upcoming);
    println!();
    println!("{}", "Past".bold());
    print_event_lines(&listing.past);
}

fn print_event_lines(events: &[Event]) {
    if events.is_empty() {
        println!("  {}", "none".dimmed());
        return;
    }
    for event in events {
        let location = event.metadata.location.as_deref().unwrap_or("");
        println!("  {:>5}  {}  {}  {}", event.id, event.event_date, event.name, location.dimmed());
    }
}
