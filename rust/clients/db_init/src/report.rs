use std::fmt;
use std::io::Write;

use crate::errors::InitError;

/// Status lines printed at each phase boundary of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner<'a> {
    Start,
    Environment(&'a str),
    Database(&'a str),
    UserCollections,
    FoodCollections,
    Seeding,
    Seeded(usize),
    Complete,
}

impl fmt::Display for Banner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Banner::Start => write!(f, "🚀 Initializing the NutriGuide database..."),
            Banner::Environment(env) => write!(f, "📊 Current environment: {env}"),
            Banner::Database(name) => write!(f, "🗄️  Target database: {name}"),
            Banner::UserCollections => write!(f, "📝 Creating user collections..."),
            Banner::FoodCollections => write!(f, "🍎 Creating food collections..."),
            Banner::Seeding => write!(f, "🌱 Inserting development sample data..."),
            Banner::Seeded(count) => {
                write!(f, "✅ Development sample data inserted ({count} documents)")
            }
            Banner::Complete => write!(f, "🎉 NutriGuide database initialization complete!"),
        }
    }
}

/// Writes operator-facing progress lines, one per call.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn report(&mut self, message: impl fmt::Display) -> Result<(), InitError> {
        writeln!(self.out, "{message}")?;
        self.out.flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
