//! Random exploration events for the wild areas.

use rand::Rng;

/// One entry in an area's exploration table, picked uniformly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExploreEvent {
    Treasure {
        gold: u32,
        items: &'static [&'static str],
        text: &'static str,
    },
    Encounter {
        enemy: &'static str,
        text: &'static str,
    },
    Nothing {
        text: &'static str,
    },
}

/// The exploration table for an area. Hub areas have none.
pub fn exploration_events(area_id: &str) -> Option<&'static [ExploreEvent]> {
    match area_id {
        "forest" => Some(&FOREST_EVENTS),
        "ruins" => Some(&RUINS_EVENTS),
        _ => None,
    }
}

/// Picks a random event from the area's table.
pub fn roll_exploration(area_id: &str, rng: &mut impl Rng) -> Option<ExploreEvent> {
    let events = exploration_events(area_id)?;
    Some(events[rng.gen_range(0..events.len())])
}

static FOREST_EVENTS: [ExploreEvent; 4] = [
    ExploreEvent::Treasure {
        gold: 20,
        items: &[],
        text: "You find a pouch of coins beneath a hollow log.",
    },
    ExploreEvent::Treasure {
        gold: 0,
        items: &["healing_potion"],
        text: "A forager's abandoned pack holds a healing potion.",
    },
    ExploreEvent::Encounter {
        enemy: "wolf",
        text: "A wolf bursts from the undergrowth!",
    },
    ExploreEvent::Nothing {
        text: "The forest is quiet. Too quiet.",
    },
];

static RUINS_EVENTS: [ExploreEvent; 4] = [
    ExploreEvent::Treasure {
        gold: 50,
        items: &[],
        text: "A crumbled altar hides a cache of old coins.",
    },
    ExploreEvent::Treasure {
        gold: 10,
        items: &["mana_potion"],
        text: "You pry a sealed vial from a collapsed shelf.",
    },
    ExploreEvent::Encounter {
        enemy: "ghost",
        text: "A chill runs down your spine. A ghost materializes!",
    },
    ExploreEvent::Nothing {
        text: "Dust and silence. Whatever lived here is long gone.",
    },
];
