use crate::prelude::*;

/// Languages with a month-name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Language {
    #[display(fmt = "bg")]
    Bulgarian,
    #[display(fmt = "cs")]
    Czech,
    #[display(fmt = "da")]
    Danish,
    #[display(fmt = "de")]
    German,
    #[display(fmt = "el")]
    Greek,
    #[display(fmt = "en")]
    English,
    #[display(fmt = "es")]
    Spanish,
    #[display(fmt = "et")]
    Estonian,
    #[display(fmt = "fi")]
    Finnish,
    #[display(fmt = "fr")]
    French,
    #[display(fmt = "ga")]
    Irish,
    #[display(fmt = "hr")]
    Croatian,
    #[display(fmt = "hu")]
    Hungarian,
    #[display(fmt = "it")]
    Italian,
    #[display(fmt = "lt")]
    Lithuanian,
    #[display(fmt = "lv")]
    Latvian,
    #[display(fmt = "mt")]
    Maltese,
    #[display(fmt = "nl")]
    Dutch,
    #[display(fmt = "pl")]
    Polish,
    #[display(fmt = "pt")]
    Portuguese,
    #[display(fmt = "ro")]
    Romanian,
    #[display(fmt = "sk")]
    Slovak,
    #[display(fmt = "sl")]
    Slovenian,
    #[display(fmt = "sv")]
    Swedish,
}

/// Lookup order of the month-name grammars
pub const LANGUAGES: [Language; 24] = [
    Language::English,
    Language::German,
    Language::French,
    Language::Spanish,
    Language::Italian,
    Language::Portuguese,
    Language::Dutch,
    Language::Danish,
    Language::Swedish,
    Language::Finnish,
    Language::Estonian,
    Language::Latvian,
    Language::Lithuanian,
    Language::Polish,
    Language::Czech,
    Language::Slovak,
    Language::Slovenian,
    Language::Croatian,
    Language::Hungarian,
    Language::Romanian,
    Language::Bulgarian,
    Language::Greek,
    Language::Irish,
    Language::Maltese,
];

/// Spellings per month, lower case, full names before abbreviations.
type MonthTable = [&'static [&'static str]; 12];

const ENGLISH: MonthTable = [
    &["january", "jan"],
    &["february", "feb"],
    &["march", "mar"],
    &["april", "apr"],
    &["may"],
    &["june", "jun"],
    &["july", "jul"],
    &["august", "aug"],
    &["september", "sept", "sep"],
    &["october", "oct"],
    &["november", "nov"],
    &["december", "dec"],
];

const GERMAN: MonthTable = [
    &["januar", "jänner", "jan"],
    &["februar", "feber", "feb"],
    &["märz", "mär", "mrz"],
    &["april", "apr"],
    &["mai"],
    &["juni", "jun"],
    &["juli", "jul"],
    &["august", "aug"],
    &["september", "sept", "sep"],
    &["oktober", "okt"],
    &["november", "nov"],
    &["dezember", "dez"],
];

const FRENCH: MonthTable = [
    &["janvier", "janv"],
    &["février", "fevrier", "févr", "fevr"],
    &["mars"],
    &["avril", "avr"],
    &["mai"],
    &["juin"],
    &["juillet", "juil"],
    &["août", "aout"],
    &["septembre", "sept"],
    &["octobre", "oct"],
    &["novembre", "nov"],
    &["décembre", "decembre", "déc", "dec"],
];

const SPANISH: MonthTable = [
    &["enero", "ene"],
    &["febrero", "feb"],
    &["marzo", "mar"],
    &["abril", "abr"],
    &["mayo", "may"],
    &["junio", "jun"],
    &["julio", "jul"],
    &["agosto", "ago"],
    &["septiembre", "setiembre", "sept", "sep"],
    &["octubre", "oct"],
    &["noviembre", "nov"],
    &["diciembre", "dic"],
];

const ITALIAN: MonthTable = [
    &["gennaio", "gen"],
    &["febbraio", "feb"],
    &["marzo", "mar"],
    &["aprile", "apr"],
    &["maggio", "mag"],
    &["giugno", "giu"],
    &["luglio", "lug"],
    &["agosto", "ago"],
    &["settembre", "set"],
    &["ottobre", "ott"],
    &["novembre", "nov"],
    &["dicembre", "dic"],
];

const PORTUGUESE: MonthTable = [
    &["janeiro", "jan"],
    &["fevereiro", "fev"],
    &["março", "marco", "mar"],
    &["abril", "abr"],
    &["maio", "mai"],
    &["junho", "jun"],
    &["julho", "jul"],
    &["agosto", "ago"],
    &["setembro", "set"],
    &["outubro", "out"],
    &["novembro", "nov"],
    &["dezembro", "dez"],
];

const DUTCH: MonthTable = [
    &["januari", "jan"],
    &["februari", "feb"],
    &["maart", "mrt"],
    &["april", "apr"],
    &["mei"],
    &["juni", "jun"],
    &["juli", "jul"],
    &["augustus", "aug"],
    &["september", "sept", "sep"],
    &["oktober", "okt"],
    &["november", "nov"],
    &["december", "dec"],
];

const DANISH: MonthTable = [
    &["januar", "jan"],
    &["februar", "feb"],
    &["marts", "mar"],
    &["april", "apr"],
    &["maj"],
    &["juni", "jun"],
    &["juli", "jul"],
    &["august", "aug"],
    &["september", "sep"],
    &["oktober", "okt"],
    &["november", "nov"],
    &["december", "dec"],
];

const SWEDISH: MonthTable = [
    &["januari", "jan"],
    &["februari", "feb"],
    &["mars", "mar"],
    &["april", "apr"],
    &["maj"],
    &["juni", "jun"],
    &["juli", "jul"],
    &["augusti", "aug"],
    &["september", "sep"],
    &["oktober", "okt"],
    &["november", "nov"],
    &["december", "dec"],
];

const FINNISH: MonthTable = [
    &["tammikuuta", "tammikuu"],
    &["helmikuuta", "helmikuu"],
    &["maaliskuuta", "maaliskuu"],
    &["huhtikuuta", "huhtikuu"],
    &["toukokuuta", "toukokuu"],
    &["kesäkuuta", "kesäkuu"],
    &["heinäkuuta", "heinäkuu"],
    &["elokuuta", "elokuu"],
    &["syyskuuta", "syyskuu"],
    &["lokakuuta", "lokakuu"],
    &["marraskuuta", "marraskuu"],
    &["joulukuuta", "joulukuu"],
];

const ESTONIAN: MonthTable = [
    &["jaanuar"],
    &["veebruar"],
    &["märts"],
    &["aprill"],
    &["mai"],
    &["juuni"],
    &["juuli"],
    &["august"],
    &["september"],
    &["oktoober"],
    &["november"],
    &["detsember"],
];

const LATVIAN: MonthTable = [
    &["janvāris", "janvārī"],
    &["februāris", "februārī"],
    &["marts", "martā"],
    &["aprīlis", "aprīlī"],
    &["maijs", "maijā"],
    &["jūnijs", "jūnijā"],
    &["jūlijs", "jūlijā"],
    &["augusts", "augustā"],
    &["septembris", "septembrī"],
    &["oktobris", "oktobrī"],
    &["novembris", "novembrī"],
    &["decembris", "decembrī"],
];

const LITHUANIAN: MonthTable = [
    &["sausio", "sausis"],
    &["vasario", "vasaris"],
    &["kovo", "kovas"],
    &["balandžio", "balandis"],
    &["gegužės", "gegužė"],
    &["birželio", "birželis"],
    &["liepos", "liepa"],
    &["rugpjūčio", "rugpjūtis"],
    &["rugsėjo", "rugsėjis"],
    &["spalio", "spalis"],
    &["lapkričio", "lapkritis"],
    &["gruodžio", "gruodis"],
];

const POLISH: MonthTable = [
    &["stycznia", "styczeń"],
    &["lutego", "luty"],
    &["marca", "marzec"],
    &["kwietnia", "kwiecień"],
    &["maja", "maj"],
    &["czerwca", "czerwiec"],
    &["lipca", "lipiec"],
    &["sierpnia", "sierpień"],
    &["września", "wrzesień"],
    &["października", "październik"],
    &["listopada", "listopad"],
    &["grudnia", "grudzień"],
];

const CZECH: MonthTable = [
    &["ledna", "leden"],
    &["února", "únor"],
    &["března", "březen"],
    &["dubna", "duben"],
    &["května", "květen"],
    &["června", "červen"],
    &["července", "červenec"],
    &["srpna", "srpen"],
    &["září"],
    &["října", "říjen"],
    &["listopadu", "listopad"],
    &["prosince", "prosinec"],
];

const SLOVAK: MonthTable = [
    &["januára", "január"],
    &["februára", "február"],
    &["marca", "marec"],
    &["apríla", "apríl"],
    &["mája", "máj"],
    &["júna", "jún"],
    &["júla", "júl"],
    &["augusta", "august"],
    &["septembra", "september"],
    &["októbra", "október"],
    &["novembra", "november"],
    &["decembra", "december"],
];

const SLOVENIAN: MonthTable = [
    &["januar"],
    &["februar"],
    &["marec"],
    &["april"],
    &["maj"],
    &["junij"],
    &["julij"],
    &["avgust"],
    &["september"],
    &["oktober"],
    &["november"],
    &["december"],
];

const CROATIAN: MonthTable = [
    &["siječnja", "siječanj"],
    &["veljače", "veljača"],
    &["ožujka", "ožujak"],
    &["travnja", "travanj"],
    &["svibnja", "svibanj"],
    &["lipnja", "lipanj"],
    &["srpnja", "srpanj"],
    &["kolovoza", "kolovoz"],
    &["rujna", "rujan"],
    &["listopada", "listopad"],
    &["studenoga", "studenog", "studeni"],
    &["prosinca", "prosinac"],
];

const HUNGARIAN: MonthTable = [
    &["január", "jan"],
    &["február", "febr"],
    &["március", "márc"],
    &["április", "ápr"],
    &["május", "máj"],
    &["június", "jún"],
    &["július", "júl"],
    &["augusztus", "aug"],
    &["szeptember", "szept"],
    &["október", "okt"],
    &["november", "nov"],
    &["december", "dec"],
];

const ROMANIAN: MonthTable = [
    &["ianuarie", "ian"],
    &["februarie", "feb"],
    &["martie", "mar"],
    &["aprilie", "apr"],
    &["mai"],
    &["iunie", "iun"],
    &["iulie", "iul"],
    &["august", "aug"],
    &["septembrie", "sept"],
    &["octombrie", "oct"],
    &["noiembrie", "noi"],
    &["decembrie", "dec"],
];

const BULGARIAN: MonthTable = [
    &["януари"],
    &["февруари"],
    &["март"],
    &["април"],
    &["май"],
    &["юни"],
    &["юли"],
    &["август"],
    &["септември"],
    &["октомври"],
    &["ноември"],
    &["декември"],
];

const GREEK: MonthTable = [
    &["ιανουαρίου", "ιανουάριος"],
    &["φεβρουαρίου", "φεβρουάριος"],
    &["μαρτίου", "μάρτιος"],
    &["απριλίου", "απρίλιος"],
    &["μαΐου", "μάιος"],
    &["ιουνίου", "ιούνιος"],
    &["ιουλίου", "ιούλιος"],
    &["αυγούστου", "αύγουστος"],
    &["σεπτεμβρίου", "σεπτέμβριος"],
    &["οκτωβρίου", "οκτώβριος"],
    &["νοεμβρίου", "νοέμβριος"],
    &["δεκεμβρίου", "δεκέμβριος"],
];

const IRISH: MonthTable = [
    &["eanáir"],
    &["feabhra"],
    &["márta"],
    &["aibreán"],
    &["bealtaine"],
    &["meitheamh"],
    &["iúil"],
    &["lúnasa"],
    &["meán fómhair"],
    &["deireadh fómhair"],
    &["samhain"],
    &["nollaig"],
];

const MALTESE: MonthTable = [
    &["jannar"],
    &["frar"],
    &["marzu"],
    &["april"],
    &["mejju"],
    &["ġunju"],
    &["lulju"],
    &["awwissu"],
    &["settembru"],
    &["ottubru"],
    &["novembru"],
    &["diċembru"],
];

impl Language {
    const fn table(self) -> &'static MonthTable {
        match self {
            Self::Bulgarian => &BULGARIAN,
            Self::Czech => &CZECH,
            Self::Danish => &DANISH,
            Self::German => &GERMAN,
            Self::Greek => &GREEK,
            Self::English => &ENGLISH,
            Self::Spanish => &SPANISH,
            Self::Estonian => &ESTONIAN,
            Self::Finnish => &FINNISH,
            Self::French => &FRENCH,
            Self::Irish => &IRISH,
            Self::Croatian => &CROATIAN,
            Self::Hungarian => &HUNGARIAN,
            Self::Italian => &ITALIAN,
            Self::Lithuanian => &LITHUANIAN,
            Self::Latvian => &LATVIAN,
            Self::Maltese => &MALTESE,
            Self::Dutch => &DUTCH,
            Self::Polish => &POLISH,
            Self::Portuguese => &PORTUGUESE,
            Self::Romanian => &ROMANIAN,
            Self::Slovak => &SLOVAK,
            Self::Slovenian => &SLOVENIAN,
            Self::Swedish => &SWEDISH,
        }
    }

    /// Every spelling of this language's months, in table order
    pub fn month_names(self) -> impl Iterator<Item = &'static str> {
        self.table().iter().flat_map(|names| names.iter().copied())
    }

    /// Month number (1-12) of a name or abbreviation, case-insensitive.
    pub fn month_number(self, name: &str) -> Option<u8> {
        let lower = name.to_lowercase();
        self.table()
            .iter()
            .position(|names| names.contains(&lower.as_str()))
            .and_then(|index| u8::try_from(index + 1).ok())
    }
}
