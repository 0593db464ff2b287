//! Plan Selection Wizard
//!
//! This example drives a small checkout flow from standard input.
//!
//! Key concepts:
//! - Named events chosen from user input
//! - Enter callbacks that print the next prompt
//! - A fallback that sends a declined payment back to the plan menu
//!
//! Run with: cargo run --example plan_selection
//! Set RUST_LOG=waystate=debug to watch the dispatch.

use std::io::{self, BufRead};
use tracing_subscriber::EnvFilter;
use waystate::{goto, state_enum, ActionError, BuildError, Fsm, FsmBuilder, StateBuilder};

state_enum! {
    enum Plan {
        Start,
        Plan1,
        Plan2,
        Plan3,
        End,
    }
}

const MENU: &str =
    "What plan would you like to choose?\n 1-Standard plan\n 2-Pro plan\n 3-Enterprise plan";

fn say(text: &'static str) -> impl Fn() -> Result<(), ActionError> + Send + Sync + 'static {
    move || {
        println!("{text}");
        Ok(())
    }
}

fn plan(id: Plan, text: &'static str) -> StateBuilder<Plan> {
    StateBuilder::new(id)
        .on_enter(say(text))
        .add_event("payment", goto(Plan::End))
        .add_event("plans", goto(Plan::Start))
}

fn wizard() -> Result<Fsm<Plan>, BuildError> {
    FsmBuilder::new()
        .initial(Plan::Start)
        .state(
            StateBuilder::new(Plan::Start)
                .on_enter(say(MENU))
                .add_event("plan1", goto(Plan::Plan1))
                .add_event("plan2", goto(Plan::Plan2))
                .add_event("plan3", goto(Plan::Plan3)),
        )
        .state(plan(
            Plan::Plan1,
            "You chose the Standard plan. p- Make payment b- Select another plan",
        ))
        .state(plan(
            Plan::Plan2,
            "You chose the Pro plan. p- Make payment b- Select another plan",
        ))
        .state(
            plan(
                Plan::Plan3,
                "You chose the Enterprise plan. p- Make payment b- Select another plan",
            )
            // Enterprise needs a sales call first.
            .add_event("payment", || {
                Err(ActionError::rejected("enterprise plans are invoiced"))
            })
            .with_fallback(Plan::Start),
        )
        .state(StateBuilder::new(Plan::End).on_enter(say("Here is the link for your payment: http://")))
        .build()
}

fn event_for(input: &str) -> &str {
    match input {
        "1" => "plan1",
        "2" => "plan2",
        "3" => "plan3",
        "p" => "payment",
        "b" => "plans",
        other => other,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Plan Selection Wizard ===\n");

    let mut fsm = wizard()?;
    // Start has an enter prompt; show it once without a transition.
    say(MENU)()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let input = line.trim();
        if input == "q" {
            break;
        }

        let outcome = fsm.event(event_for(input));
        if outcome.is_ignored() {
            println!("Sorry, '{input}' is not an option here.");
        } else if let Some(failure) = outcome.failure() {
            println!("That did not work ({}).", failure.error);
            if fsm.current_state() == Plan::Start {
                say(MENU)()?;
            }
        }

        if fsm.current_state() == Plan::End {
            break;
        }
    }

    println!("\nVisited: {:?}", fsm.history().get_path());
    Ok(())
}
