//! The Swedish holidays and their names.

/// A Swedish public holiday or holiday-like calendar custom.
///
/// Variants are declared in build order: fixed dates first, then the dates
/// derived from Easter Sunday and from weekday searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Holiday {
    /// Nyårsdagen, January 1.
    NewYearsDay,
    /// Trettondedag jul, January 6.
    Epiphany,
    /// Första maj, May 1.
    LabourDay,
    /// Sveriges nationaldag, June 6.
    NationalDay,
    /// Juldagen, December 25.
    ChristmasDay,
    /// Annandag jul, December 26.
    BoxingDay,
    /// Julafton, December 24 (custom, not statutory).
    ChristmasEve,
    /// Nyårsafton, December 31 (custom, not statutory).
    NewYearsEve,
    /// Påskdagen.
    EasterSunday,
    /// Långfredagen, the Friday before Easter Sunday.
    GoodFriday,
    /// Annandag påsk, the day after Easter Sunday.
    EasterMonday,
    /// Kristi himmelsfärdsdag, the sixth Thursday after Easter Sunday
    /// (Easter Sunday + 39 days).
    AscensionDay,
    /// Pingstdagen, seven weeks after Easter Sunday.
    Pentecost,
    /// Midsommardagen, the Saturday in June 20–26.
    MidsummerDay,
    /// Midsommarafton, the Friday in June 19–25 (custom, not statutory).
    MidsummerEve,
    /// Alla helgons dag, the Saturday in October 31 – November 6.
    AllSaintsDay,
}

impl Holiday {
    /// Every holiday, in build order.
    pub const ALL: [Holiday; 16] = [
        Holiday::NewYearsDay,
        Holiday::Epiphany,
        Holiday::LabourDay,
        Holiday::NationalDay,
        Holiday::ChristmasDay,
        Holiday::BoxingDay,
        Holiday::ChristmasEve,
        Holiday::NewYearsEve,
        Holiday::EasterSunday,
        Holiday::GoodFriday,
        Holiday::EasterMonday,
        Holiday::AscensionDay,
        Holiday::Pentecost,
        Holiday::MidsummerDay,
        Holiday::MidsummerEve,
        Holiday::AllSaintsDay,
    ];

    /// The Swedish name, lower case as written in running text.
    pub fn swedish_name(&self) -> &'static str {
        match self {
            Holiday::NewYearsDay => "nyårsdagen",
            Holiday::Epiphany => "trettondedag jul",
            Holiday::LabourDay => "första maj",
            Holiday::NationalDay => "nationaldagen",
            Holiday::ChristmasDay => "juldagen",
            Holiday::BoxingDay => "annandag jul",
            Holiday::ChristmasEve => "julafton",
            Holiday::NewYearsEve => "nyårsafton",
            Holiday::EasterSunday => "påskdagen",
            Holiday::GoodFriday => "långfredagen",
            Holiday::EasterMonday => "annandag påsk",
            Holiday::AscensionDay => "kristi himmelsfärdsdag",
            Holiday::Pentecost => "pingstdagen",
            Holiday::MidsummerDay => "midsommardagen",
            Holiday::MidsummerEve => "midsommarafton",
            Holiday::AllSaintsDay => "alla helgons dag",
        }
    }

    /// English name, for logs and developer output.
    pub fn english_name(&self) -> &'static str {
        match self {
            Holiday::NewYearsDay => "New Year's Day",
            Holiday::Epiphany => "Epiphany",
            Holiday::LabourDay => "Labour Day",
            Holiday::NationalDay => "National Day",
            Holiday::ChristmasDay => "Christmas Day",
            Holiday::BoxingDay => "Boxing Day",
            Holiday::ChristmasEve => "Christmas Eve",
            Holiday::NewYearsEve => "New Year's Eve",
            Holiday::EasterSunday => "Easter Sunday",
            Holiday::GoodFriday => "Good Friday",
            Holiday::EasterMonday => "Easter Monday",
            Holiday::AscensionDay => "Ascension Day",
            Holiday::Pentecost => "Pentecost",
            Holiday::MidsummerDay => "Midsummer Day",
            Holiday::MidsummerEve => "Midsummer Eve",
            Holiday::AllSaintsDay => "All Saints' Day",
        }
    }

    /// Look a holiday up by its Swedish name.
    pub fn from_swedish_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.swedish_name() == name)
    }

    /// `true` for the holidays named in Lag (1989:253) om allmänna helgdagar.
    ///
    /// Christmas Eve, New Year's Eve and Midsummer Eve are customs: widely
    /// observed as days off, but not public holidays in law.
    pub fn is_statutory(&self) -> bool {
        !matches!(
            self,
            Holiday::ChristmasEve | Holiday::NewYearsEve | Holiday::MidsummerEve
        )
    }

    /// `true` if the date moves with Easter Sunday.
    pub fn is_easter_dependent(&self) -> bool {
        matches!(
            self,
            Holiday::EasterSunday
                | Holiday::GoodFriday
                | Holiday::EasterMonday
                | Holiday::AscensionDay
                | Holiday::Pentecost
        )
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.swedish_name())
    }
}
