//! Frame driver for a camera and a group of enemies

use drillbot_engine::config::Config;
use drillbot_engine::foundation::random::RngSource;
use drillbot_engine::render::{Camera, RenderSink};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::Rng;

use crate::config::StageConfig;
use crate::enemy::{Enemy, EnemyError};

/// Camera plus enemies, advanced one frame per [`tick`](Self::tick)
#[derive(Debug)]
pub struct Stage {
    camera: Camera,
    enemies: Vec<Enemy>,
    random: RngSource<StdRng>,
    frame: u64,
}

impl Stage {
    /// Validate `config` and spawn its enemies
    ///
    /// Each enemy gets its own generator seeded from the stage generator, so a
    /// fixed `seed` reproduces the whole stage.
    pub fn new(config: &StageConfig) -> Result<Self, EnemyError> {
        config.validate()?;

        let mut random = match config.seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::from_entropy(),
        };

        let enemies = (0..config.enemy_count)
            .map(|_| {
                let seed = random.inner_mut().gen::<u64>();
                Enemy::spawn(config.enemy.clone(), RngSource::seeded(seed))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut camera = config.camera.to_camera();
        camera.update();

        debug!("Stage built with {} enemies (seed {:?})", enemies.len(), config.seed);
        Ok(Self {
            camera,
            enemies,
            random,
            frame: 0,
        })
    }

    /// Run one frame: camera update, then update, calc and draw per enemy
    pub fn tick(&mut self, sink: &mut dyn RenderSink) {
        self.frame += 1;
        self.camera.update();
        for enemy in &mut self.enemies {
            enemy.update();
            enemy.calc();
            enemy.draw(sink);
        }
    }

    /// Kill the enemy at `index`; returns `false` if there is none
    pub fn kill(&mut self, index: usize) -> bool {
        match self.enemies.get_mut(index) {
            Some(enemy) => {
                enemy.kill();
                true
            }
            None => {
                warn!("No enemy at index {index} (stage has {})", self.enemies.len());
                false
            }
        }
    }

    /// Kill a random living enemy, returning its index
    pub fn kill_random(&mut self) -> Option<usize> {
        let alive: Vec<usize> = self
            .enemies
            .iter()
            .enumerate()
            .filter(|(_, enemy)| !enemy.is_dead())
            .map(|(index, _)| index)
            .collect();
        if alive.is_empty() {
            return None;
        }
        let index = alive[self.random.inner_mut().gen_range(0..alive.len())];
        self.enemies[index].kill();
        Some(index)
    }

    /// Number of enemies still alive
    pub fn alive_count(&self) -> usize {
        self.enemies.iter().filter(|enemy| !enemy.is_dead()).count()
    }

    /// Frames ticked so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// All enemies, dead ones included
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Stage camera
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable stage camera; changes apply on the next tick
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }
}
