//! JavaScript boundary: one implicit game per page, driven through plain exported functions.

use std::cell::RefCell;

use mineboard_core::{Coord, Coord2, Game, GameError};
use wasm_bindgen::prelude::*;

use settings::{Args, Settings};

mod settings;

thread_local! {
    static SETTINGS: RefCell<Settings> = RefCell::new(Settings::default());
    static GAME: RefCell<Option<Game>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn run() {
    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = gloo::utils::window()
        .location()
        .hash()
        .unwrap_or_default();

    match Args::from_hash(&location_hash) {
        Ok(args) => {
            if let Some(log_level) = args.verbose.log_level() {
                console_log::init_with_level(log_level).expect("Error initializing logger");
            }
            log::debug!("seed: {:?}", args.seed);
            SETTINGS.with(|settings| settings.replace(Settings::from_args(&args)));
        }
        Err(err) => {
            console_log::init_with_level(log::Level::Warn).expect("Error initializing logger");
            log::warn!("Ignoring invalid settings in location hash: {}", err);
        }
    }
}

#[wasm_bindgen(js_name = newGame)]
pub fn new_game() -> Result<(), JsError> {
    let game = fresh_game().map_err(to_js_error)?;
    GAME.with(|slot| slot.replace(Some(game)));
    Ok(())
}

#[wasm_bindgen(js_name = openField)]
pub fn open_field(x: u32, y: u32) -> Result<(), JsError> {
    respond(with_game(|game| game.open_field(coords(x, y)?)))
}

#[wasm_bindgen(js_name = toggleFlag)]
pub fn toggle_flag(x: u32, y: u32) -> Result<(), JsError> {
    respond(with_game(|game| game.toggle_flag(coords(x, y)?)))
}

/// Opens around an already opened number when its flags are all placed.
#[wasm_bindgen(js_name = chordField)]
pub fn chord_field(x: u32, y: u32) -> Result<(), JsError> {
    respond(with_game(|game| game.chord(coords(x, y)?)))
}

#[wasm_bindgen(js_name = isLost)]
pub fn is_lost() -> bool {
    GAME.with(|slot| slot.borrow().as_ref().is_some_and(Game::is_lost))
}

#[wasm_bindgen(js_name = isWon)]
pub fn is_won() -> bool {
    GAME.with(|slot| slot.borrow().as_ref().is_some_and(Game::is_won))
}

#[wasm_bindgen(js_name = getState)]
pub fn get_state() -> String {
    with_game(|game| Ok(game.state())).unwrap_or_default()
}

/// Same board as `getState`, as JSON with status and mine counter included.
#[wasm_bindgen(js_name = getSnapshot)]
pub fn get_snapshot() -> Result<String, JsError> {
    let snapshot = with_game(|game| Ok(game.snapshot())).map_err(to_js_error)?;
    Ok(serde_json::to_string(&snapshot)?)
}

#[wasm_bindgen(js_name = minesLeft)]
pub fn mines_left() -> i32 {
    with_game(|game| Ok(game.mines_left() as i32)).unwrap_or_default()
}

fn fresh_game() -> mineboard_core::Result<Game> {
    SETTINGS.with(|settings| {
        let mut settings = settings.borrow_mut();
        let seed = settings.next_seed();
        Game::new(settings.config, seed)
    })
}

/// Runs `f` on the current game, starting one first if the page never called `newGame`.
fn with_game<R>(
    f: impl FnOnce(&mut Game) -> mineboard_core::Result<R>,
) -> mineboard_core::Result<R> {
    GAME.with(|slot| {
        let mut slot = slot.borrow_mut();
        let game = match slot.take() {
            Some(game) => game,
            None => fresh_game()?,
        };
        f(slot.insert(game))
    })
}

fn coords(x: u32, y: u32) -> mineboard_core::Result<Coord2> {
    let x = Coord::try_from(x).map_err(|_| GameError::OutOfBounds)?;
    let y = Coord::try_from(y).map_err(|_| GameError::OutOfBounds)?;
    Ok((x, y))
}

/// Clicks after the game ended are ignored, every other error is thrown to the caller.
fn respond<T>(result: mineboard_core::Result<T>) -> Result<(), JsError> {
    match result {
        Ok(_) => Ok(()),
        Err(GameError::GameOver) => {
            log::debug!("Ignoring move, game already ended");
            Ok(())
        }
        Err(err) => Err(to_js_error(err)),
    }
}

fn to_js_error(err: GameError) -> JsError {
    log::warn!("Rejected call: {}", err);
    JsError::new(&err.to_string())
}
