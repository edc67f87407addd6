/*!
# Statements

Statements end at a newline or a colon. Optional arguments may be left
out from the end, or skipped with an empty slot between commas.
*/

#[path = "statements/assign.rs"]
#[allow(non_snake_case)]
pub mod ASSIGN;

#[path = "statements/beep.rs"]
#[allow(non_snake_case)]
pub mod BEEP;

#[path = "statements/exit.rs"]
#[allow(non_snake_case)]
pub mod EXIT;

#[path = "statements/filter.rs"]
#[allow(non_snake_case)]
pub mod FILTER;

#[path = "statements/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "statements/loop.rs"]
#[allow(non_snake_case)]
pub mod LOOP;

#[path = "statements/play.rs"]
#[allow(non_snake_case)]
pub mod PLAY;

#[path = "statements/print.rs"]
#[allow(non_snake_case)]
pub mod PRINT;

#[path = "statements/sound.rs"]
#[allow(non_snake_case)]
pub mod SOUND;
