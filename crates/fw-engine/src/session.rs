//! Top-level session controller.

use std::collections::HashMap;

use rand::SeedableRng;
use rand::rngs::StdRng;

use fw_world::{SceneGraph, SceneId};

use crate::actions;
use crate::command::Command;
use crate::config::Config;
use crate::error::{EngineError, EngineResult};
use crate::media::{MediaGenerator, NullGenerator, SongRequest};
use crate::narrator;
use crate::state::GameState;
use crate::turn::{self, Ending};

/// One player's session: a scene graph, the game state that plays over it,
/// and the side channel of generated scene images.
///
/// The session is the single writer of both graph and state. A host drives
/// it one raw input at a time through [`Session::process`] and may persist
/// [`Session::state`] and [`Session::images`] after any turn.
pub struct Session {
    graph: SceneGraph,
    state: GameState,
    config: Config,
    rng: StdRng,
    generator: Box<dyn MediaGenerator>,
    images: HashMap<SceneId, String>,
}

impl Session {
    /// Start a fresh session over `graph`.
    ///
    /// The graph is validated up front; a dangling reference is a fatal
    /// setup error, never a mid-turn surprise. Scene image generation is
    /// kicked off for every scene, fire and forget.
    pub fn new(graph: SceneGraph, config: Config) -> EngineResult<Self> {
        graph.validate()?;
        let state = GameState::fresh(&config, graph.start.clone());
        let rng = StdRng::seed_from_u64(config.seed);
        let mut session = Self {
            graph,
            state,
            config,
            rng,
            generator: Box::new(NullGenerator),
            images: HashMap::new(),
        };
        session.request_all_images();
        Ok(session)
    }

    /// Resume a session from a host-supplied snapshot.
    pub fn resume(
        graph: SceneGraph,
        state: GameState,
        images: HashMap<SceneId, String>,
        config: Config,
    ) -> EngineResult<Self> {
        graph.validate()?;
        if !graph.contains(&state.current_scene) {
            return Err(EngineError::StaleSnapshot(state.current_scene));
        }
        let rng = StdRng::seed_from_u64(config.seed);
        Ok(Self {
            graph,
            state,
            config,
            rng,
            generator: Box::new(NullGenerator),
            images,
        })
    }

    /// Install a media generator and request images for any scene that does
    /// not have one yet.
    pub fn set_generator(&mut self, generator: Box<dyn MediaGenerator>) {
        self.generator = generator;
        self.request_all_images();
    }

    /// The scene graph, including mutations made so far.
    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    /// The current game state, for the host to persist.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The session configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generated scene images collected so far, keyed by scene id.
    pub fn images(&self) -> &HashMap<SceneId, String> {
        &self.images
    }

    /// Process one raw input as a full turn and return the narration.
    ///
    /// After a game over only `restart` does anything; every other input
    /// gets a fixed notice and mutates nothing. While the session is
    /// active, the command is dispatched, hunger attrition runs, and the
    /// termination checks decide whether this turn ended the session. The
    /// status block is appended in every case.
    pub fn process(&mut self, input: &str) -> String {
        let command = Command::parse(input);
        let mut parts: Vec<String> = Vec::new();

        if self.state.game_over {
            if command == Command::Restart {
                parts.push(actions::restart(&mut self.state, &self.config, &self.graph));
            } else {
                parts.push(narrator::session_ended());
            }
        } else {
            let action_text = match command {
                Command::Go(target) => actions::go(&mut self.state, &self.graph, &target),
                Command::Take(item) => actions::take(&mut self.state, &mut self.graph, &item),
                Command::Use(item) => actions::use_item(&mut self.state, &mut self.graph, &item),
                Command::Fight => actions::fight(&mut self.state, &mut self.graph, &mut self.rng),
                // Restart is only honored after a game over; while active it
                // is ignored like any unrecognized input.
                Command::Restart | Command::Unrecognized => String::new(),
            };
            if !action_text.is_empty() {
                parts.push(action_text);
            }

            turn::apply_attrition(&mut self.state);
            if let Some(ending) = turn::check_termination(&mut self.state, &self.graph, &self.config)
            {
                if ending == Ending::Victory {
                    self.request_victory_song();
                }
                parts.push(narrator::ending(ending));
            }
        }

        self.collect_images();

        let scene = self
            .graph
            .scene(&self.state.current_scene)
            .expect("current scene exists in validated graph");
        parts.push(narrator::status(&self.state, scene));
        parts.join("\n\n")
    }

    /// The status block for the current state, without processing a turn.
    /// Lets a host render the opening scene before the first command.
    pub fn describe(&self) -> String {
        let scene = self
            .graph
            .scene(&self.state.current_scene)
            .expect("current scene exists in validated graph");
        narrator::status(&self.state, scene)
    }

    /// The commands that would currently do something, for the host to
    /// offer as choices. Derived, read-only.
    pub fn suggestions(&self) -> Vec<String> {
        let mut out = Vec::new();
        if self.state.game_over {
            out.push("restart".to_string());
        }
        let scene = self
            .graph
            .scene(&self.state.current_scene)
            .expect("current scene exists in validated graph");
        for target in &scene.connected {
            out.push(format!("go {target}"));
        }
        for item in &scene.items {
            out.push(format!("take {item}"));
        }
        if !scene.enemies.is_empty() {
            out.push("fight".to_string());
        }
        for item in &self.state.inventory {
            out.push(format!("use {item}"));
        }
        out
    }

    fn request_all_images(&mut self) {
        for (id, scene) in self.graph.iter() {
            if !self.images.contains_key(id) {
                self.generator.request_image(id, &scene.image_prompt);
            }
        }
    }

    fn collect_images(&mut self) {
        for (id, reference) in self.generator.poll_images() {
            self.images.insert(id, reference);
        }
    }

    fn request_victory_song(&mut self) {
        let request = SongRequest {
            prompt: "Triumphant orchestral fanfare".to_string(),
            title: song_title(&self.graph.goal),
            tags: vec!["orchestral".to_string(), "fanfare".to_string()],
            instrumental: true,
        };
        self.state.victory_song = self.generator.compose_song(&request);
    }
}

/// Title-case a scene id for use as a song title: `ruin_depths` becomes
/// `Ruin Depths`.
fn song_title(goal: &SceneId) -> String {
    goal.as_str()
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
