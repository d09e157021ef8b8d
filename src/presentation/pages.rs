//! Server-rendered HTML pages.
//!
//! Every page is a complete document built from a shared layout plus
//! page-specific markup. All upstream and user-supplied text goes through
//! [`escape`] before it is written into the document.

use axum::response::Html;
use chrono::SecondsFormat;

use crate::application::airport_service::AirportTraffic;
use crate::application::flight_service::FlightDetails;
use crate::application::traffic_service::LocationTraffic;
use crate::domain::airport::Airport;
use crate::domain::flight::{FlightEndpoint, FlightInfo};
use crate::domain::saved_flight::{SavedFlight, SavedFlightDraft};
use crate::domain::state_vector::{StateVector, UNKNOWN_CALLSIGN};

pub const STYLES_CSS: &str = r#"* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: system-ui, sans-serif; background: #f5f7fa; color: #1f2933; }
nav { background: #102a43; padding: 10px 16px; display: flex; gap: 20px; align-items: center; }
nav a { color: #bcccdc; text-decoration: none; font-size: 14px; }
nav a.brand { color: #fff; font-weight: bold; }
nav a:hover { color: #fff; }
.container { max-width: 1100px; margin: 0 auto; padding: 20px 16px; }
h1 { font-size: 24px; margin-bottom: 12px; }
h2 { font-size: 18px; margin: 20px 0 8px; }
table { width: 100%; border-collapse: collapse; font-size: 14px; background: #fff; }
th { background: #243b53; color: #fff; padding: 8px; text-align: left; }
td { padding: 6px 8px; border-bottom: 1px solid #d9e2ec; }
form.card, .card { background: #fff; border: 1px solid #d9e2ec; border-radius: 6px; padding: 14px; margin-bottom: 14px; }
label { display: block; font-size: 13px; margin: 6px 0 2px; }
input, select, textarea { padding: 6px; border: 1px solid #9fb3c8; border-radius: 4px; font-size: 14px; }
button { margin-top: 8px; padding: 6px 14px; border: 0; border-radius: 4px; background: #2680c2; color: #fff; cursor: pointer; }
button.danger { background: #ba2525; }
.message { background: #e3f8ff; border: 1px solid #81defd; padding: 10px; border-radius: 4px; margin-bottom: 12px; }
.muted { color: #829ab1; }
.priority-high { color: #ba2525; font-weight: bold; }
.priority-medium { color: #cb6e17; }
a { color: #2680c2; }"#;

const NAV_HTML: &str = r#"<nav>
    <a href="/" class="brand">flight-tracker</a>
    <a href="/airportQuery">Airports</a>
    <a href="/saved">Saved flights</a>
    <a href="/saved/add">Add flight</a>
</nav>"#;

/// Minimal HTML escaping for text and attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn text_or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => escape(v),
        _ => "-".to_string(),
    }
}

fn number_or_dash(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", decimals, v),
        None => "-".to_string(),
    }
}

fn render_page(title: &str, body: &str) -> Html<String> {
    let mut s = String::with_capacity(body.len() + NAV_HTML.len() + 512);
    s.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    s.push_str("<meta charset=\"UTF-8\">\n");
    s.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    s.push_str("<title>flight-tracker");
    if !title.is_empty() {
        s.push_str(" | ");
        s.push_str(&escape(title));
    }
    s.push_str("</title>\n");
    s.push_str("<link rel=\"stylesheet\" href=\"/styles.css\">\n");
    s.push_str("</head>\n<body>\n");
    s.push_str(NAV_HTML);
    s.push_str("\n<main class=\"container\">\n");
    s.push_str(body);
    s.push_str("\n</main>\n</body>\n</html>");
    Html(s)
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

const AIRPORT_FORM: &str = r#"<form class="card" action="/airport" method="get">
    <h2>Airport details</h2>
    <label for="airport-icao">ICAO code</label>
    <input id="airport-icao" name="icao" placeholder="KJFK" required>
    <button type="submit">Look up</button>
</form>"#;

const AIRPORT_TRAFFIC_FORM: &str = r#"<form class="card" action="/opensky/airport" method="get">
    <h2>Live aircraft near an airport</h2>
    <label for="traffic-icao">ICAO code</label>
    <input id="traffic-icao" name="icao" placeholder="KJFK" required>
    <label for="traffic-radius">Radius (km)</label>
    <input id="traffic-radius" name="radius" type="number" min="1" value="80">
    <button type="submit">Show aircraft</button>
</form>"#;

const LOCATION_FORM: &str = r#"<form class="card" action="/opensky/location" method="get">
    <h2>Live aircraft near a point</h2>
    <label for="loc-lat">Latitude</label>
    <input id="loc-lat" name="lat" type="number" step="any" min="-90" max="90" required>
    <label for="loc-lon">Longitude</label>
    <input id="loc-lon" name="lon" type="number" step="any" min="-180" max="180" required>
    <label for="loc-radius">Radius (km)</label>
    <input id="loc-radius" name="radius" type="number" min="1" value="50">
    <button type="submit">Show aircraft</button>
</form>"#;

const FLIGHT_FORM: &str = r#"<form class="card" action="/flight/details" method="get">
    <h2>Flight details</h2>
    <label for="flight-callsign">Callsign (ICAO)</label>
    <input id="flight-callsign" name="callsign" placeholder="DAL230">
    <label for="flight-iata">or flight number (IATA)</label>
    <input id="flight-iata" name="flight_iata" placeholder="DL230">
    <button type="submit">Look up</button>
</form>"#;

pub fn home() -> Html<String> {
    let body = format!(
        "<h1>Flight tracker</h1>\n\
         <p class=\"muted\">Airport metadata, live traffic and your saved flights.</p>\n\
         {AIRPORT_FORM}\n{AIRPORT_TRAFFIC_FORM}\n{LOCATION_FORM}\n{FLIGHT_FORM}"
    );
    render_page("", &body)
}

pub fn airport_query_form() -> Html<String> {
    let body = format!("<h1>Airports</h1>\n{AIRPORT_FORM}\n{AIRPORT_TRAFFIC_FORM}");
    render_page("Airports", &body)
}

// ---------------------------------------------------------------------------
// Airports and live traffic
// ---------------------------------------------------------------------------

pub fn airport_details(airport: &Airport) -> Html<String> {
    let icao = escape(&airport.icao_code);
    let body = format!(
        r#"<h1>{name}</h1>
<table>
<tr><th>ICAO</th><td>{icao}</td></tr>
<tr><th>IATA</th><td>{iata}</td></tr>
<tr><th>Latitude</th><td>{lat:.6}</td></tr>
<tr><th>Longitude</th><td>{lon:.6}</td></tr>
<tr><th>Elevation (ft)</th><td>{elevation}</td></tr>
</table>
<p><a href="/opensky/airport?icao={icao_param}">Live aircraft near {icao}</a></p>"#,
        name = escape(&airport.name),
        icao = icao,
        iata = text_or_dash(airport.iata_code.as_deref()),
        lat = airport.latitude_deg,
        lon = airport.longitude_deg,
        elevation = number_or_dash(airport.elevation_ft, 0),
        icao_param = urlencoding::encode(&airport.icao_code),
    );
    render_page(&airport.name, &body)
}

fn callsign_cell(state: &StateVector) -> String {
    if state.callsign == UNKNOWN_CALLSIGN {
        return format!("<span class=\"muted\">{}</span>", escape(&state.callsign));
    }
    format!(
        "<a href=\"/flight/details?callsign={}\">{}</a>",
        urlencoding::encode(&state.callsign),
        escape(&state.callsign)
    )
}

fn ground_label(on_ground: Option<bool>) -> &'static str {
    match on_ground {
        Some(true) => "yes",
        Some(false) => "no",
        None => "-",
    }
}

fn aircraft_table(aircraft: &[StateVector]) -> String {
    if aircraft.is_empty() {
        return "<p class=\"muted\">No aircraft in range.</p>".to_string();
    }

    let mut s = String::from(
        "<table>\n<tr><th>Callsign</th><th>ICAO24</th><th>Lat</th><th>Lon</th>\
         <th>Altitude (m)</th><th>Speed (m/s)</th><th>Heading</th><th>On ground</th></tr>\n",
    );
    for state in aircraft {
        s.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            callsign_cell(state),
            escape(&state.icao24),
            number_or_dash(state.latitude, 4),
            number_or_dash(state.longitude, 4),
            number_or_dash(state.altitude_m, 0),
            number_or_dash(state.ground_speed_mps, 1),
            number_or_dash(state.heading_deg, 0),
            ground_label(state.on_ground),
        ));
    }
    s.push_str("</table>");
    s
}

pub fn airport_flights(traffic: &AirportTraffic) -> Html<String> {
    let airport = &traffic.airport;
    let body = format!(
        r#"<h1>Aircraft near {name}</h1>
<p class="muted">{icao} / {iata} at {lat:.4}, {lon:.4}, radius {radius} km, {count} aircraft</p>
{table}"#,
        name = escape(&airport.name),
        icao = escape(&airport.icao_code),
        iata = text_or_dash(airport.iata_code.as_deref()),
        lat = airport.latitude_deg,
        lon = airport.longitude_deg,
        radius = traffic.radius_km,
        count = traffic.aircraft.len(),
        table = aircraft_table(&traffic.aircraft),
    );
    render_page(&format!("Aircraft near {}", airport.icao_code), &body)
}

pub fn location_radius(traffic: &LocationTraffic) -> Html<String> {
    let groups = &traffic.aircraft;
    let mut body = format!(
        r#"<h1>Aircraft near {lat:.4}, {lon:.4}</h1>
<p class="muted">Radius {radius} km, {count} aircraft</p>
<h2>Airborne ({airborne_count})</h2>
{airborne}
<h2>Landed ({landed_count})</h2>
{landed}"#,
        lat = traffic.center.latitude,
        lon = traffic.center.longitude,
        radius = traffic.radius_km,
        count = groups.total(),
        airborne_count = groups.airborne.len(),
        airborne = aircraft_table(&groups.airborne),
        landed_count = groups.landed.len(),
        landed = aircraft_table(&groups.landed),
    );

    if !groups.unknown.is_empty() {
        body.push_str(&format!(
            "\n<h2>Ground state unknown ({})</h2>\n{}",
            groups.unknown.len(),
            aircraft_table(&groups.unknown)
        ));
    }
    render_page("Aircraft near location", &body)
}

// ---------------------------------------------------------------------------
// Flight details
// ---------------------------------------------------------------------------

fn endpoint_rows(label: &str, endpoint: Option<&FlightEndpoint>) -> String {
    let Some(e) = endpoint else {
        return format!("<tr><th>{label}</th><td colspan=\"2\">-</td></tr>\n");
    };
    format!(
        "<tr><th>{label}</th><td>{airport} ({iata})</td><td>scheduled {scheduled}, estimated {estimated}, \
         actual {actual}, terminal {terminal}, gate {gate}, delay {delay} min</td></tr>\n",
        airport = text_or_dash(e.airport.as_deref()),
        iata = text_or_dash(e.iata.as_deref()),
        scheduled = text_or_dash(e.scheduled.as_deref()),
        estimated = text_or_dash(e.estimated.as_deref()),
        actual = text_or_dash(e.actual.as_deref()),
        terminal = text_or_dash(e.terminal.as_deref()),
        gate = text_or_dash(e.gate.as_deref()),
        delay = number_or_dash(e.delay, 0),
    )
}

fn flight_table(flight: &FlightInfo) -> String {
    let number = flight.flight.as_ref();
    let airline = flight.airline.as_ref();

    let mut s = String::from("<table>\n");
    s.push_str(&format!(
        "<tr><th>Flight</th><td colspan=\"2\">{} / {}</td></tr>\n",
        text_or_dash(number.and_then(|f| f.iata.as_deref())),
        text_or_dash(number.and_then(|f| f.icao.as_deref())),
    ));
    s.push_str(&format!(
        "<tr><th>Airline</th><td colspan=\"2\">{}</td></tr>\n",
        text_or_dash(airline.and_then(|a| a.name.as_deref())),
    ));
    s.push_str(&format!(
        "<tr><th>Date</th><td colspan=\"2\">{}</td></tr>\n<tr><th>Status</th><td colspan=\"2\">{}</td></tr>\n",
        text_or_dash(flight.flight_date.as_deref()),
        text_or_dash(flight.flight_status.as_deref()),
    ));
    s.push_str(&endpoint_rows("Departure", flight.departure.as_ref()));
    s.push_str(&endpoint_rows("Arrival", flight.arrival.as_ref()));

    if let Some(live) = &flight.live {
        s.push_str(&format!(
            "<tr><th>Live</th><td colspan=\"2\">{}, {} at {} m, {} km/h, heading {}, on ground {}</td></tr>\n",
            number_or_dash(live.latitude, 4),
            number_or_dash(live.longitude, 4),
            number_or_dash(live.altitude, 0),
            number_or_dash(live.speed_horizontal, 0),
            number_or_dash(live.direction, 0),
            ground_label(live.is_ground),
        ));
    }
    s.push_str("</table>");
    s
}

fn quick_add_form(callsign: &str) -> String {
    format!(
        r#"<form class="card" action="/saved/quick-add" method="post">
    <h2>Save this flight</h2>
    <input type="hidden" name="callsign" value="{callsign}">
    <label for="qa-notes">Notes</label>
    <textarea id="qa-notes" name="notes" maxlength="500" rows="2" cols="50"></textarea>
    <label for="qa-priority">Priority</label>
    <select id="qa-priority" name="priority">
        <option value="low">low</option>
        <option value="medium">medium</option>
        <option value="high">high</option>
    </select>
    <button type="submit">Quick add</button>
</form>"#,
        callsign = escape(callsign),
    )
}

pub fn flight_details(details: &FlightDetails, saved: bool, requested: &str) -> Html<String> {
    let mut body = format!("<h1>Flight {}</h1>\n", escape(requested));

    if saved {
        body.push_str("<div class=\"message\">Flight saved to your list.</div>\n");
    }

    match &details.flight {
        Some(flight) => {
            body.push_str(&flight_table(flight));
            let callsign = flight
                .flight
                .as_ref()
                .and_then(|f| f.icao.as_deref())
                .unwrap_or(requested);
            body.push('\n');
            body.push_str(&quick_add_form(callsign));
        }
        None => body.push_str("<p class=\"muted\">No matching flight found.</p>"),
    }

    if let Some(meta) = &details.pagination {
        body.push_str(&format!(
            "\n<p class=\"muted\">Showing {} of {} results</p>",
            meta.count.unwrap_or(0),
            meta.total.unwrap_or(0),
        ));
    }

    render_page(&format!("Flight {}", requested), &body)
}

// ---------------------------------------------------------------------------
// Saved flights
// ---------------------------------------------------------------------------

pub fn saved_flights(flights: &[SavedFlight], message: Option<&str>) -> Html<String> {
    let mut body = String::from("<h1>Saved flights</h1>\n");

    if let Some(message) = message.filter(|m| !m.trim().is_empty()) {
        body.push_str(&format!("<div class=\"message\">{}</div>\n", escape(message)));
    }
    body.push_str("<p><a href=\"/saved/add\">Add a flight</a></p>\n");

    if flights.is_empty() {
        body.push_str("<p class=\"muted\">No saved flights yet.</p>");
        return render_page("Saved flights", &body);
    }

    body.push_str(
        "<table>\n<tr><th>Callsign</th><th>Flight</th><th>Airline</th><th>From</th><th>To</th>\
         <th>Status</th><th>Priority</th><th>Notes</th><th>Saved</th><th></th></tr>\n",
    );
    for saved in flights {
        let f = &saved.flight;
        body.push_str(&format!(
            "<tr><td><a href=\"/flight/details?callsign={callsign_param}\">{callsign}</a></td><td>{iata}</td>\
             <td>{airline}</td><td>{from} ({from_iata})</td><td>{to} ({to_iata})</td><td>{status}</td>\
             <td class=\"priority-{priority}\">{priority}</td><td>{notes}</td><td>{saved_at}</td>\
             <td><form action=\"/saved/delete/{id}\" method=\"post\"><button class=\"danger\" type=\"submit\">Delete</button></form></td></tr>\n",
            callsign_param = urlencoding::encode(&f.callsign),
            callsign = escape(&f.callsign),
            iata = text_or_dash(f.flight_iata.as_deref()),
            airline = text_or_dash(f.airline.as_deref()),
            from = text_or_dash(f.departure_airport.as_deref()),
            from_iata = text_or_dash(f.departure_iata.as_deref()),
            to = text_or_dash(f.arrival_airport.as_deref()),
            to_iata = text_or_dash(f.arrival_iata.as_deref()),
            status = text_or_dash(f.status.as_deref()),
            priority = f.priority,
            notes = text_or_dash(f.notes.as_deref()),
            saved_at = saved.saved_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            id = urlencoding::encode(&saved.id),
        ));
    }
    body.push_str("</table>");
    render_page("Saved flights", &body)
}

fn text_input(id: &str, label: &str, value: Option<&str>) -> String {
    format!(
        "<label for=\"{id}\">{label}</label>\n<input id=\"{id}\" name=\"{id}\" value=\"{value}\">\n",
        value = escape(value.unwrap_or_default()),
    )
}

pub fn add_flight_form(prefill: &SavedFlightDraft) -> Html<String> {
    let priority = prefill.priority.as_deref().unwrap_or("low").to_ascii_lowercase();
    let options: String = ["low", "medium", "high"]
        .iter()
        .map(|p| {
            let selected = if *p == priority { " selected" } else { "" };
            format!("<option value=\"{p}\"{selected}>{p}</option>")
        })
        .collect();

    let mut form = String::from("<form class=\"card\" action=\"/saved/add\" method=\"post\">\n");
    form.push_str(&text_input("callsign", "Callsign", prefill.callsign.as_deref()));
    form.push_str(&text_input("flightIata", "Flight (IATA)", prefill.flight_iata.as_deref()));
    form.push_str(&text_input("airline", "Airline", prefill.airline.as_deref()));
    form.push_str(&text_input("departureAirport", "Departure airport", prefill.departure_airport.as_deref()));
    form.push_str(&text_input("departureIata", "Departure IATA", prefill.departure_iata.as_deref()));
    form.push_str(&text_input("arrivalAirport", "Arrival airport", prefill.arrival_airport.as_deref()));
    form.push_str(&text_input("arrivalIata", "Arrival IATA", prefill.arrival_iata.as_deref()));
    form.push_str(&text_input("status", "Status", prefill.status.as_deref()));
    form.push_str(&format!(
        "<label for=\"notes\">Notes</label>\n<textarea id=\"notes\" name=\"notes\" maxlength=\"500\" rows=\"3\" cols=\"50\">{}</textarea>\n",
        escape(prefill.notes.as_deref().unwrap_or_default()),
    ));
    form.push_str(&format!(
        "<label for=\"priority\">Priority</label>\n<select id=\"priority\" name=\"priority\">{options}</select>\n"
    ));
    form.push_str("<button type=\"submit\">Save flight</button>\n</form>");

    render_page("Add flight", &format!("<h1>Add a flight</h1>\n{form}"))
}
