//! The demo script bundled with Swoon.
//!
//! Three characters with very different temperaments, enough content to
//! exercise every engine path. Also serves as the template written by
//! `swoon init`.

use crate::character::Character;
use crate::dialogue::{Dialogue, DialogueOption};
use crate::script::Script;

/// Build the bundled demo script.
pub fn demo() -> Script {
    Script::new("Swoon")
        .with_character(
            Character::new("Alex (Mean)")
                .with_portrait("portraits/alex.png")
                .with_dialogue(
                    Dialogue::new("Oh, it's you again. What do you want?")
                        .with_option(DialogueOption::new("Just saying hi!", -5))
                        .with_option(DialogueOption::new("How's your day?", -5))
                        .with_option(DialogueOption::new("I'll just leave you alone.", 5)),
                )
                .with_dialogue(
                    Dialogue::new("Do you really think I care about your hobbies?")
                        .with_option(DialogueOption::new("I like reading.", -5))
                        .with_option(DialogueOption::new("I love sports.", -10))
                        .with_option(DialogueOption::new("I don't have hobbies.", 0)),
                )
                .with_finale(
                    "Well, I guess you're not the worst person. \
                     Maybe I could tolerate you for a little longer.",
                ),
        )
        .with_character(
            Character::new("Taylor (Flirty)")
                .with_portrait("portraits/taylor.png")
                .with_dialogue(
                    Dialogue::new("Hey there, cutie. What brings you here today?")
                        .with_option(DialogueOption::new("Just wanted to see you.", 10))
                        .with_option(DialogueOption::new("I was just passing by.", 5))
                        .with_option(DialogueOption::new("No reason.", -5)),
                )
                .with_dialogue(
                    Dialogue::new(
                        "Do you believe in love at first sight, or should I walk by again?",
                    )
                    .with_option(DialogueOption::new("It must be fate!", 10))
                    .with_option(DialogueOption::new("I'm not sure...", 0))
                    .with_option(DialogueOption::new("That's cheesy.", -5)),
                )
                .with_finale("Looks like we've really hit it off! So, how about that date?"),
        )
        .with_character(
            Character::new("Nicholas Cage")
                .with_portrait("portraits/cage.png")
                .with_dialogue(
                    Dialogue::new("I can see it in your eyes. You think I'm intense, don't you?")
                        .with_option(DialogueOption::new("Absolutely! You're a legend.", 15))
                        .with_option(DialogueOption::new("A little too intense, maybe.", 0))
                        .with_option(DialogueOption::new("No, not really.", -5)),
                )
                .with_dialogue(
                    Dialogue::new("Would you join me on a wild adventure across the desert?")
                        .with_option(DialogueOption::new("Of course! Let's ride!", 10))
                        .with_option(DialogueOption::new("Sounds dangerous...", -5))
                        .with_option(DialogueOption::new("I'll pass.", -10)),
                )
                .with_dialogue(
                    Dialogue::new("I once bought a castle. Do you want to hear the story?")
                        .with_option(DialogueOption::new("Tell me everything!", 10))
                        .with_option(DialogueOption::new("You're full of surprises.", 5))
                        .with_option(DialogueOption::new("Not really interested.", -10)),
                )
                .with_finale(
                    "You and I... we could rule the world together, \
                     one crazy adventure at a time!",
                ),
        )
}
