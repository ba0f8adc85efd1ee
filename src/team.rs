//! Team assembly and validation.
//!
//! A [`Team`] always has exactly [`TEAM_SIZE`] members; the only way to get one
//! is through [`TeamBuilder::build`], which checks the name and member count.
//! Builder methods return `Result<&mut TeamBuilder, TeamError>` so a whole
//! assembly chains with `?`:
//!
//! ```
//! use ggst_team::catalog::Catalog;
//! use ggst_team::team::TeamBuilder;
//!
//! # fn main() -> Result<(), ggst_team::team::TeamError> {
//! let mut builder = TeamBuilder::new(Catalog::builtin());
//! builder.set_team_name("Night Owls")?.parse_members_string("A:sol, B:ky, C:may")?;
//! let team = builder.build()?;
//! assert_eq!(team.members()[1].character_id, "ky");
//! # Ok(())
//! # }
//! ```

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

use crate::catalog::{Catalog, CharacterId};

/// Number of members in every team.
pub const TEAM_SIZE: usize = 3;

/// One player and the character they play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub player_name: String,
    pub character_id: CharacterId,
}

/// A validated team: a non-empty name and exactly three members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    name: String,
    members: [TeamMember; TEAM_SIZE],
}

impl Team {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Members in the order they were added.
    pub fn members(&self) -> &[TeamMember; TEAM_SIZE] {
        &self.members
    }

    /// Assemble a team from a name and a `"Player:Character, ..."` list.
    pub fn assemble(catalog: &Catalog, name: &str, members: &str) -> Result<Team, TeamError> {
        let mut builder = TeamBuilder::new(catalog);
        builder.set_team_name(name)?.parse_members_string(members)?;
        builder.build()
    }
}

/// Broad failure category of a [`TeamError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamErrorKind {
    /// A required field is blank or a member segment is malformed
    Validation,
    /// A character reference did not match the catalog
    Resolution,
    /// A member was added to a full team
    Capacity,
    /// `build` was called with the wrong number of members
    Composition,
}

/// Error raised while assembling a team.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TeamError {
    /// Team name is blank
    #[error("team name is required")]
    EmptyTeamName,
    /// Player name is blank
    #[error("player name is required")]
    EmptyPlayerName,
    /// Segment lacks a `Player:Character` shape
    #[error("invalid member format: \"{0}\" (expected \"Player:Character\")")]
    MalformedMember(String),
    /// `build` called before a name was set
    #[error("team name has not been set")]
    MissingTeamName,
    /// No catalog entry matches the reference
    #[error("character \"{0}\" not found")]
    UnknownCharacter(String),
    /// A fourth member was added
    #[error("a team can have at most 3 members")]
    TeamFull,
    /// `build` called with fewer than three members
    #[error("a team needs exactly 3 members (currently {0})")]
    WrongMemberCount(usize),
}

impl TeamError {
    pub fn kind(&self) -> TeamErrorKind {
        match self {
            TeamError::EmptyTeamName
            | TeamError::EmptyPlayerName
            | TeamError::MalformedMember(_)
            | TeamError::MissingTeamName => TeamErrorKind::Validation,
            TeamError::UnknownCharacter(_) => TeamErrorKind::Resolution,
            TeamError::TeamFull => TeamErrorKind::Capacity,
            TeamError::WrongMemberCount(_) => TeamErrorKind::Composition,
        }
    }
}

/// Shortest non-empty player name, a colon, then a non-empty remainder.
fn member_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(.+?):(.+)$").expect("member pattern is valid"))
}

/// Accumulates a team name and resolved members, then produces a [`Team`].
///
/// After any error the builder state is unspecified; call [`reset`](Self::reset)
/// before reusing it.
#[derive(Debug)]
pub struct TeamBuilder<'c> {
    catalog: &'c Catalog,
    team_name: String,
    members: Vec<TeamMember>,
}

impl<'c> TeamBuilder<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog, team_name: String::new(), members: Vec::with_capacity(TEAM_SIZE) }
    }

    /// Set the team name (trimmed). Blank names are rejected.
    pub fn set_team_name(&mut self, name: &str) -> Result<&mut Self, TeamError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TeamError::EmptyTeamName);
        }
        self.team_name = name.to_string();
        Ok(self)
    }

    /// Append a member, resolving the character through the catalog.
    pub fn add_member(
        &mut self,
        player_name: &str,
        character_id_or_alias: &str,
    ) -> Result<&mut Self, TeamError> {
        if self.members.len() >= TEAM_SIZE {
            return Err(TeamError::TeamFull);
        }

        let player_name = player_name.trim();
        if player_name.is_empty() {
            return Err(TeamError::EmptyPlayerName);
        }

        let character_id = self
            .catalog
            .resolve_character_id(character_id_or_alias)
            .ok_or_else(|| TeamError::UnknownCharacter(character_id_or_alias.to_string()))?;

        self.members.push(TeamMember {
            player_name: player_name.to_string(),
            character_id: character_id.to_string(),
        });
        Ok(self)
    }

    /// Add every member of a comma-separated `"Player:Character"` list, left to right.
    ///
    /// The player name ends at the first `:`; everything after it is the
    /// character reference. The first bad segment aborts the call.
    pub fn parse_members_string(&mut self, members: &str) -> Result<&mut Self, TeamError> {
        for segment in members.split(',') {
            let segment = segment.trim();
            let caps = member_pattern()
                .captures(segment)
                .ok_or_else(|| TeamError::MalformedMember(segment.to_string()))?;
            self.add_member(caps[1].trim(), caps[2].trim())?;
        }
        Ok(self)
    }

    /// Number of members added so far.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Validate and produce the team, leaving the builder empty.
    pub fn build(&mut self) -> Result<Team, TeamError> {
        if self.team_name.is_empty() {
            return Err(TeamError::MissingTeamName);
        }

        let count = self.members.len();
        if count != TEAM_SIZE {
            return Err(TeamError::WrongMemberCount(count));
        }
        let members: [TeamMember; TEAM_SIZE] = std::mem::take(&mut self.members)
            .try_into()
            .map_err(|_| TeamError::WrongMemberCount(count))?;

        let team = Team { name: std::mem::take(&mut self.team_name), members };
        self.reset();
        Ok(team)
    }

    /// Clear the name and members.
    pub fn reset(&mut self) -> &mut Self {
        self.team_name.clear();
        self.members.clear();
        self
    }
}
