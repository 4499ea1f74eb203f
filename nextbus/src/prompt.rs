//! Interactive prompt loop.
//!
//! Asks for a route, a direction and a stop, runs one cycle, prints the
//! answer, and repeats. The loop ends when the route or stop can't be
//! found, or when input runs out. Fetch, parse and timeout errors are
//! reported and the loop carries on with the next cycle.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn};

use crate::domain::WallClock;
use crate::provider::TransitProvider;
use crate::session::{CycleError, CycleReport, CycleRequest, Session};

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    EndOfInput,
    RouteNotFound,
    StopNotFound,
}

/// What the loop did before stopping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSummary {
    /// Cycles that reached the pipeline, successful or not.
    pub cycles: usize,
    pub exit: LoopExit,
}

/// Run the prompt loop until it exits.
///
/// `clock` is read once per cycle, after all three answers are in.
pub async fn run_prompt_loop<P, R, W>(
    session: &Session<P>,
    input: R,
    out: &mut W,
    clock: impl Fn() -> WallClock,
) -> std::io::Result<LoopSummary>
where
    P: TransitProvider,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut cycles = 0;

    let exit = loop {
        let Some(route_query) = ask(&mut lines, out, "Enter the route ID or label:").await? else {
            break LoopExit::EndOfInput;
        };

        // Check the route before asking anything else.
        if session.catalog().resolve(&route_query).is_none() {
            writeln!(out, "No matching route found for the input '{route_query}'")?;
            break LoopExit::RouteNotFound;
        }

        let direction_prompt = "Enter the direction (north/south):";
        let Some(direction_text) = ask(&mut lines, out, direction_prompt).await? else {
            break LoopExit::EndOfInput;
        };
        let Some(stop_query) = ask(&mut lines, out, "Enter the bus stop:").await? else {
            break LoopExit::EndOfInput;
        };

        let request = CycleRequest::new(route_query, direction_text, stop_query);
        cycles += 1;

        match session.run_cycle(&request, clock()).await {
            Ok(report) => print_report(out, &report)?,
            Err(CycleError::RouteNotFound { query }) => {
                writeln!(out, "No matching route found for the input '{query}'")?;
                break LoopExit::RouteNotFound;
            }
            Err(CycleError::StopNotFound { query, .. }) => {
                writeln!(out, "Wrong bus stop: {query}")?;
                break LoopExit::StopNotFound;
            }
            Err(e) => {
                warn!("cycle failed: {e}");
                writeln!(out, "Could not get the next departure: {e}")?;
            }
        }
    };

    info!(cycles, ?exit, "prompt loop finished");
    Ok(LoopSummary { cycles, exit })
}

/// Print a prompt and read one trimmed line; `None` at end of input.
async fn ask<R, W>(
    lines: &mut tokio::io::Lines<R>,
    out: &mut W,
    prompt: &str,
) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{prompt}")?;
    out.flush()?;
    Ok(lines.next_line().await?.map(|line| line.trim().to_string()))
}

fn print_report<W: Write>(out: &mut W, report: &CycleReport) -> std::io::Result<()> {
    writeln!(
        out,
        "PlaceCode: {}, Description: {}",
        report.stop.place_code, report.stop.description
    )?;

    match &report.next {
        Some(next) => writeln!(out, "{}", next.estimate),
        None => writeln!(out, "No departures found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::nextrip::{Endpoint, MockNexTripClient};

    const NETWORK: &str = r#"{
        "routes": [{"route_id": "901", "agency_id": 0, "route_label": "METRO Blue Line"}],
        "directions": {"901": [{"direction_id": 1, "direction_name": "Southbound"}]},
        "stops": {
            "901/1": [
                {"place_code": "TF22", "description": "Target Field Station Platform 2"},
                {"place_code": "USBA", "description": "U.S. Bank Stadium Station"},
                {"place_code": "MAAM", "description": "Mall of America Station"}
            ]
        },
        "departures": {
            "901/1/TF22": [{"departure_text": "7 Min", "direction_text": "SB"}],
            "901/1/USBA": [{"departure_text": "1:15", "direction_text": "SB"}],
            "901/1/MAAM": []
        }
    }"#;

    fn at(h: u32, m: u32) -> WallClock {
        WallClock::from_hm(h, m).unwrap()
    }

    async fn session(client: MockNexTripClient) -> Session<MockNexTripClient> {
        Session::start(client, SessionConfig::default()).await.unwrap()
    }

    async fn run(session: &Session<MockNexTripClient>, input: &str) -> (LoopSummary, String) {
        let mut out = Vec::new();
        let summary = run_prompt_loop(session, input.as_bytes(), &mut out, || at(13, 10))
            .await
            .unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn one_cycle_then_end_of_input() {
        let session = session(MockNexTripClient::from_json(NETWORK).unwrap()).await;

        let (summary, out) = run(&session, "901\nsouth\nPlatform 2\n").await;

        assert_eq!(
            summary,
            LoopSummary {
                cycles: 1,
                exit: LoopExit::EndOfInput,
            }
        );
        assert!(out.contains("PlaceCode: TF22, Description: Target Field Station Platform 2"));
        assert!(out.contains("The next bus will arrive in 7 Minutes"));
    }

    #[tokio::test]
    async fn input_is_trimmed_and_loop_repeats() {
        let session = session(MockNexTripClient::from_json(NETWORK).unwrap()).await;

        let (summary, out) = run(
            &session,
            "  METRO Blue Line \nsouth\n Stadium\n901\nsouth\nMall of America\n",
        )
        .await;

        assert_eq!(summary.cycles, 2);
        assert!(out.contains("The next bus will arrive in 5 minutes"));
        assert!(out.contains("No departures found"));
    }

    #[tokio::test]
    async fn unknown_route_exits_before_direction_prompt() {
        let session = session(MockNexTripClient::from_json(NETWORK).unwrap()).await;

        let (summary, out) = run(&session, "Red Line\nsouth\nPlatform 2\n").await;

        assert_eq!(summary.exit, LoopExit::RouteNotFound);
        assert_eq!(summary.cycles, 0);
        assert!(out.contains("No matching route found for the input 'Red Line'"));
        assert!(!out.contains("Enter the direction"));
    }

    #[tokio::test]
    async fn unknown_stop_exits() {
        let session = session(MockNexTripClient::from_json(NETWORK).unwrap()).await;

        let (summary, out) = run(&session, "901\nsouth\nUnion Depot\n901\n").await;

        assert_eq!(summary.exit, LoopExit::StopNotFound);
        assert!(out.contains("Wrong bus stop: Union Depot"));
    }

    #[tokio::test]
    async fn fetch_error_is_reported_and_loop_continues() {
        let client = MockNexTripClient::from_json(NETWORK)
            .unwrap()
            .fail_on(Endpoint::Departures);
        let session = session(client).await;

        let (summary, out) = run(&session, "901\nsouth\nPlatform 2\n901\nsouth\nStadium\n").await;

        assert_eq!(summary.cycles, 2);
        assert_eq!(summary.exit, LoopExit::EndOfInput);
        assert_eq!(out.matches("Could not get the next departure").count(), 2);
    }

    #[tokio::test]
    async fn end_of_input_mid_cycle() {
        let session = session(MockNexTripClient::from_json(NETWORK).unwrap()).await;

        let (summary, _) = run(&session, "901\nsouth\n").await;

        assert_eq!(summary.exit, LoopExit::EndOfInput);
        assert_eq!(summary.cycles, 0);
    }
}
