//! Teams that create their own players.

/// Player roles across both sports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerRole {
    Goalkeeper,
    Defender,
    Midfielder,
    Offensive,
    Support,
    Tanker,
    Nuker,
    DamageDealer,
}

impl PlayerRole {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Goalkeeper => "GoalkeeperPlayer",
            Self::Defender => "DefenderPlayer",
            Self::Midfielder => "MiddlefieldPlayer",
            Self::Offensive => "OffensivePlayer",
            Self::Support => "SupportPlayer",
            Self::Tanker => "TankerPlayer",
            Self::Nuker => "NukerPlayer",
            Self::DamageDealer => "DamageDealerPlayer",
        }
    }
}

/// A team decides which players it is made of.
pub trait SportTeam {
    /// Display name used in the roster heading.
    fn title(&self) -> &'static str;

    /// The factory method.
    fn create_team(&self) -> Vec<PlayerRole>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FootballTeam;

impl SportTeam for FootballTeam {
    fn title(&self) -> &'static str {
        "Football Team"
    }

    fn create_team(&self) -> Vec<PlayerRole> {
        vec![
            PlayerRole::Goalkeeper,
            PlayerRole::Defender,
            PlayerRole::Midfielder,
            PlayerRole::Offensive,
        ]
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DotaTeam;

impl SportTeam for DotaTeam {
    fn title(&self) -> &'static str {
        "Dota Team"
    }

    fn create_team(&self) -> Vec<PlayerRole> {
        vec![
            PlayerRole::Support,
            PlayerRole::Tanker,
            PlayerRole::Nuker,
            PlayerRole::DamageDealer,
        ]
    }
}
