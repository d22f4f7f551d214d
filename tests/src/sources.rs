//! Entropy sources with observable behaviour

use ecdh_p256_api::{EntropySource, Error, Result};
use std::collections::VecDeque;

/// Answers requests from a queue of scripted draws, then fails
#[derive(Debug, Default)]
pub struct ScriptedSource {
    draws: VecDeque<Vec<u8>>,
    pub calls: usize,
}

impl ScriptedSource {
    pub fn new<I>(draws: I) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        Self {
            draws: draws.into_iter().collect(),
            calls: 0,
        }
    }
}

impl EntropySource for ScriptedSource {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        self.calls += 1;
        match self.draws.pop_front() {
            Some(draw) if draw.len() == dest.len() => {
                dest.copy_from_slice(&draw);
                Ok(())
            }
            _ => Err(Error::RandomFailure {
                context: "ScriptedSource",
            }),
        }
    }
}

/// Always fails, counting how often it was asked
#[derive(Debug, Default)]
pub struct FailingSource {
    pub calls: usize,
}

impl EntropySource for FailingSource {
    fn fill(&mut self, _dest: &mut [u8]) -> Result<()> {
        self.calls += 1;
        Err(Error::RandomFailure {
            context: "FailingSource",
        })
    }
}

/// Fills every request with the same byte
#[derive(Debug)]
pub struct ConstantSource {
    pub byte: u8,
    pub calls: usize,
}

impl ConstantSource {
    pub fn new(byte: u8) -> Self {
        Self { byte, calls: 0 }
    }
}

impl EntropySource for ConstantSource {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        self.calls += 1;
        dest.fill(self.byte);
        Ok(())
    }
}
