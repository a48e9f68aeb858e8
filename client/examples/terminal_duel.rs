//! Terminal Duel Example
//!
//! Pick a creature, watch the matchup, then battle the computer by typing
//! `attack`, `special` or `heal`. Type `/quit` to leave.
//!
//! Set `POKEDUEL_OPPONENT_DELAY_MS=0` to skip the pacing delays and
//! `RUST_LOG=debug` to see every resolved turn.

use anyhow::Result;
use async_trait::async_trait;
use pokeduel_client::{
    Action, BattleSession, ClientConfig, Creature, DuelClient, DuelHandler, Outcome,
    PresentationEvent, Side, VersusEvent,
};
use pokeduel_team::Roster;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

struct TerminalDuel {
    input: Lines<BufReader<Stdin>>,
}

impl TerminalDuel {
    async fn prompt(&mut self, text: &str) -> Option<String> {
        println!("{}", text);
        match self.input.next_line().await {
            Ok(Some(line)) if line.trim() != "/quit" => Some(line.trim().to_string()),
            _ => None,
        }
    }
}

fn describe(creature: &Creature) -> String {
    format!(
        "{}{} [{}] ATK {} / DEF {} / HP {}",
        creature.name,
        if creature.shiny { " ✨" } else { "" },
        creature.types.join(", "),
        creature.attack,
        creature.defense,
        creature.hp
    )
}

#[async_trait]
impl DuelHandler for TerminalDuel {
    async fn choose_creature(
        &mut self,
        cards: &[Creature],
        previous: Option<&Creature>,
    ) -> Option<String> {
        println!("Choose your Pokémon:");
        for (i, card) in cards.iter().enumerate() {
            println!("  {:>2}. {}", i + 1, describe(card));
        }
        if let Some(previous) = previous {
            println!("Last time you picked {} (press enter to keep it)", previous.name);
        }

        loop {
            let line = self.prompt("Number or name:").await?;
            if line.is_empty() {
                if let Some(previous) = previous {
                    return Some(previous.name.clone());
                }
                continue;
            }
            let chosen = match line.parse::<usize>() {
                Ok(n) => cards.get(n.wrapping_sub(1)),
                Err(_) => cards.iter().find(|c| c.name.eq_ignore_ascii_case(&line)),
            };
            match chosen {
                Some(card) => return Some(card.name.clone()),
                None => println!("No such Pokémon: {}", line),
            }
        }
    }

    async fn choose_action(&mut self, battle: &BattleSession) -> Option<Action> {
        loop {
            let player = battle.player();
            let line = self
                .prompt(&format!(
                    "{} HP {}/{} - attack, special or heal?",
                    player.name,
                    player.hp(),
                    player.max_hp()
                ))
                .await?;
            match line.parse::<Action>() {
                Ok(action) => return Some(action),
                Err(e) => println!("{}", e),
            }
        }
    }

    async fn on_versus(&mut self, event: &VersusEvent) {
        match event {
            VersusEvent::PlayerIntro(creature) => println!("You: {}", describe(creature)),
            VersusEvent::VersusShown => println!("        === VS ==="),
            VersusEvent::OpponentIntro(creature) => println!("Foe: {}", describe(creature)),
        }
    }

    async fn on_battle_start(&mut self, battle: &BattleSession) {
        println!(
            "Battle! {} vs {}",
            battle.player().name,
            battle.opponent().name
        );
    }

    async fn on_event(&mut self, event: &PresentationEvent) {
        match event {
            PresentationEvent::Log(line) => println!("> {}", line),
            PresentationEvent::HpChanged {
                side,
                hp,
                max_hp,
                band,
            } => {
                let who = if *side == Side::Player { "Your" } else { "Foe's" };
                println!("  {} HP: {}/{} ({:?})", who, hp, max_hp, band);
            }
            PresentationEvent::OpponentTurnScheduled => println!("  The foe is thinking..."),
            PresentationEvent::DefeatAnimation { side } => println!("  The {} fainted!", side),
            PresentationEvent::EndNotification { message } => println!("\n{}", message),
            _ => {}
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("Pokémon Duel");
    println!("============");

    let mut client = DuelClient::new(ClientConfig::from_env(), Roster::builtin()?);
    let mut handler = TerminalDuel {
        input: BufReader::new(tokio::io::stdin()).lines(),
    };

    match client.run(&mut handler).await? {
        Some(Outcome::OpponentDefeated) => println!("Thanks for playing, champion!"),
        Some(_) => println!("Better luck next time."),
        None => println!("Bye!"),
    }

    Ok(())
}
