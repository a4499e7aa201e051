//! Static villager attributes.

use vt_core::GridPoint;

/// A villager's occupation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Job {
    pub title:    String,
    pub location: GridPoint,
}

impl Job {
    pub fn new(title: impl Into<String>, location: GridPoint) -> Self {
        Self { title: title.into(), location }
    }
}

/// Everything about a villager that never changes during a run.
///
/// `family` and `friends` hold villager names, not ids, so a profile can
/// reference people who are not (yet) on the roster.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VillagerProfile {
    pub name:        String,
    /// Display colour, `"#rrggbb"`.
    pub color:       String,
    /// Tile corner of the villager's house.
    pub home:        GridPoint,
    pub job:         Job,
    pub family:      Vec<String>,
    pub friends:     Vec<String>,
    pub hobby_spot:  GridPoint,
    pub personality: String,
}

impl VillagerProfile {
    /// A profile with no family, friends, or personality text.  The hobby
    /// spot defaults to home.
    pub fn new(name: impl Into<String>, home: GridPoint, job: Job) -> Self {
        Self {
            name: name.into(),
            color: "#ffffff".to_owned(),
            home,
            job,
            family: Vec::new(),
            friends: Vec::new(),
            hobby_spot: home,
            personality: String::new(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_family<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.family = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_friends<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.friends = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_hobby_spot(mut self, spot: GridPoint) -> Self {
        self.hobby_spot = spot;
        self
    }

    pub fn with_personality(mut self, text: impl Into<String>) -> Self {
        self.personality = text.into();
        self
    }

    /// `true` if `name` appears in this villager's own friend list.
    ///
    /// One-directional: says nothing about whether `name` lists this
    /// villager back.
    #[inline]
    pub fn counts_as_friend(&self, name: &str) -> bool {
        self.friends.iter().any(|f| f == name)
    }
}
