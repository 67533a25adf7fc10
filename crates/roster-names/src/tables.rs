//! Static declension tables for common Ukrainian first names and
//! patronymics.
//!
//! Each entry carries the five case forms used for matching: nominative,
//! genitive, dative, accusative, locative. Lookup is exact and
//! case-sensitive on the stored nominative; names missing from the tables
//! fall through to the suffix heuristics in [`crate::decline`].
//!
//! Vocative forms are deliberately absent: order documents never address
//! people directly.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Declined forms of one name root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameDeclension {
    pub nominative: &'static str,
    pub genitive: &'static str,
    pub dative: &'static str,
    pub accusative: &'static str,
    pub locative: &'static str,
}

impl NameDeclension {
    /// All five case forms, nominative first.
    pub fn forms(&self) -> [&'static str; 5] {
        [
            self.nominative,
            self.genitive,
            self.dative,
            self.accusative,
            self.locative,
        ]
    }
}

const fn entry(
    nominative: &'static str,
    genitive: &'static str,
    dative: &'static str,
    accusative: &'static str,
    locative: &'static str,
) -> NameDeclension {
    NameDeclension {
        nominative,
        genitive,
        dative,
        accusative,
        locative,
    }
}

pub static MALE_FIRST_NAMES: &[NameDeclension] = &[
    entry("Андрій", "Андрія", "Андрію", "Андрія", "Андрієві"),
    entry("Анатолій", "Анатолія", "Анатолію", "Анатолія", "Анатолієві"),
    entry("Антон", "Антона", "Антону", "Антона", "Антонові"),
    entry("Артем", "Артема", "Артему", "Артема", "Артемові"),
    entry("Богдан", "Богдана", "Богдану", "Богдана", "Богданові"),
    entry("Борис", "Бориса", "Борису", "Бориса", "Борисові"),
    entry("Вадим", "Вадима", "Вадиму", "Вадима", "Вадимові"),
    entry("Валерій", "Валерія", "Валерію", "Валерія", "Валерієві"),
    entry("Василь", "Василя", "Василю", "Василя", "Василеві"),
    entry("Віктор", "Віктора", "Віктору", "Віктора", "Вікторові"),
    entry("Віталій", "Віталія", "Віталію", "Віталія", "Віталієві"),
    entry("Владислав", "Владислава", "Владиславу", "Владислава", "Владиславові"),
    entry("Володимир", "Володимира", "Володимиру", "Володимира", "Володимирові"),
    entry("Геннадій", "Геннадія", "Геннадію", "Геннадія", "Геннадієві"),
    entry("Григорій", "Григорія", "Григорію", "Григорія", "Григорієві"),
    entry("Денис", "Дениса", "Денису", "Дениса", "Денисові"),
    entry("Дмитро", "Дмитра", "Дмитру", "Дмитра", "Дмитрові"),
    entry("Євген", "Євгена", "Євгену", "Євгена", "Євгенові"),
    entry("Іван", "Івана", "Івану", "Івана", "Іванові"),
    entry("Ігор", "Ігоря", "Ігорю", "Ігоря", "Ігореві"),
    entry("Ілля", "Іллі", "Іллі", "Іллю", "Іллі"),
    entry("Костянтин", "Костянтина", "Костянтину", "Костянтина", "Костянтинові"),
    entry("Леонід", "Леоніда", "Леоніду", "Леоніда", "Леонідові"),
    entry("Максим", "Максима", "Максиму", "Максима", "Максимові"),
    entry("Микола", "Миколи", "Миколі", "Миколу", "Миколі"),
    entry("Мирослав", "Мирослава", "Мирославу", "Мирослава", "Мирославові"),
    entry("Михайло", "Михайла", "Михайлу", "Михайла", "Михайлові"),
    entry("Назар", "Назара", "Назару", "Назара", "Назарові"),
    entry("Олег", "Олега", "Олегу", "Олега", "Олегові"),
    entry("Олександр", "Олександра", "Олександру", "Олександра", "Олександрові"),
    entry("Олексій", "Олексія", "Олексію", "Олексія", "Олексієві"),
    entry("Остап", "Остапа", "Остапу", "Остапа", "Остапові"),
    entry("Павло", "Павла", "Павлу", "Павла", "Павлові"),
    entry("Петро", "Петра", "Петру", "Петра", "Петрові"),
    entry("Роман", "Романа", "Роману", "Романа", "Романові"),
    entry("Ростислав", "Ростислава", "Ростиславу", "Ростислава", "Ростиславові"),
    entry("Руслан", "Руслана", "Руслану", "Руслана", "Русланові"),
    entry("Святослав", "Святослава", "Святославу", "Святослава", "Святославові"),
    entry("Сергій", "Сергія", "Сергію", "Сергія", "Сергієві"),
    entry("Станіслав", "Станіслава", "Станіславу", "Станіслава", "Станіславові"),
    entry("Степан", "Степана", "Степану", "Степана", "Степанові"),
    entry("Тарас", "Тараса", "Тарасу", "Тараса", "Тарасові"),
    entry("Федір", "Федора", "Федору", "Федора", "Федорові"),
    entry("Юрій", "Юрія", "Юрію", "Юрія", "Юрієві"),
    entry("Ярослав", "Ярослава", "Ярославу", "Ярослава", "Ярославові"),
];

pub static FEMALE_FIRST_NAMES: &[NameDeclension] = &[
    entry("Алла", "Алли", "Аллі", "Аллу", "Аллі"),
    entry("Анна", "Анни", "Анні", "Анну", "Анні"),
    entry("Валентина", "Валентини", "Валентині", "Валентину", "Валентині"),
    entry("Вікторія", "Вікторії", "Вікторії", "Вікторію", "Вікторії"),
    entry("Галина", "Галини", "Галині", "Галину", "Галині"),
    entry("Дарина", "Дарини", "Дарині", "Дарину", "Дарині"),
    entry("Інна", "Інни", "Інні", "Інну", "Інні"),
    entry("Ірина", "Ірини", "Ірині", "Ірину", "Ірині"),
    entry("Катерина", "Катерини", "Катерині", "Катерину", "Катерині"),
    entry("Лариса", "Лариси", "Ларисі", "Ларису", "Ларисі"),
    entry("Людмила", "Людмили", "Людмилі", "Людмилу", "Людмилі"),
    entry("Любов", "Любові", "Любові", "Любов", "Любові"),
    entry("Марія", "Марії", "Марії", "Марію", "Марії"),
    entry("Надія", "Надії", "Надії", "Надію", "Надії"),
    entry("Наталія", "Наталії", "Наталії", "Наталію", "Наталії"),
    entry("Оксана", "Оксани", "Оксані", "Оксану", "Оксані"),
    entry("Олена", "Олени", "Олені", "Олену", "Олені"),
    entry("Ольга", "Ольги", "Ользі", "Ольгу", "Ользі"),
    entry("Світлана", "Світлани", "Світлані", "Світлану", "Світлані"),
    entry("Софія", "Софії", "Софії", "Софію", "Софії"),
    entry("Тетяна", "Тетяни", "Тетяні", "Тетяну", "Тетяні"),
    entry("Христина", "Христини", "Христині", "Христину", "Христині"),
    entry("Юлія", "Юлії", "Юлії", "Юлію", "Юлії"),
    entry("Яна", "Яни", "Яні", "Яну", "Яні"),
];

pub static MALE_PATRONYMICS: &[NameDeclension] = &[
    entry("Анатолійович", "Анатолійовича", "Анатолійовичу", "Анатолійовича", "Анатолійовичу"),
    entry("Андрійович", "Андрійовича", "Андрійовичу", "Андрійовича", "Андрійовичу"),
    entry("Богданович", "Богдановича", "Богдановичу", "Богдановича", "Богдановичу"),
    entry("Васильович", "Васильовича", "Васильовичу", "Васильовича", "Васильовичу"),
    entry("Вікторович", "Вікторовича", "Вікторовичу", "Вікторовича", "Вікторовичу"),
    entry("Володимирович", "Володимировича", "Володимировичу", "Володимировича", "Володимировичу"),
    entry("Григорович", "Григоровича", "Григоровичу", "Григоровича", "Григоровичу"),
    entry("Дмитрович", "Дмитровича", "Дмитровичу", "Дмитровича", "Дмитровичу"),
    entry("Іванович", "Івановича", "Івановичу", "Івановича", "Івановичу"),
    entry("Ігорович", "Ігоровича", "Ігоровичу", "Ігоровича", "Ігоровичу"),
    entry("Миколайович", "Миколайовича", "Миколайовичу", "Миколайовича", "Миколайовичу"),
    entry("Михайлович", "Михайловича", "Михайловичу", "Михайловича", "Михайловичу"),
    entry("Олегович", "Олеговича", "Олеговичу", "Олеговича", "Олеговичу"),
    entry("Олександрович", "Олександровича", "Олександровичу", "Олександровича", "Олександровичу"),
    entry("Олексійович", "Олексійовича", "Олексійовичу", "Олексійовича", "Олексійовичу"),
    entry("Павлович", "Павловича", "Павловичу", "Павловича", "Павловичу"),
    entry("Петрович", "Петровича", "Петровичу", "Петровича", "Петровичу"),
    entry("Романович", "Романовича", "Романовичу", "Романовича", "Романовичу"),
    entry("Сергійович", "Сергійовича", "Сергійовичу", "Сергійовича", "Сергійовичу"),
    entry("Степанович", "Степановича", "Степановичу", "Степановича", "Степановичу"),
    entry("Федорович", "Федоровича", "Федоровичу", "Федоровича", "Федоровичу"),
    entry("Юрійович", "Юрійовича", "Юрійовичу", "Юрійовича", "Юрійовичу"),
    entry("Ярославович", "Ярославовича", "Ярославовичу", "Ярославовича", "Ярославовичу"),
];

pub static FEMALE_PATRONYMICS: &[NameDeclension] = &[
    entry("Андріївна", "Андріївни", "Андріївні", "Андріївну", "Андріївні"),
    entry("Василівна", "Василівни", "Василівні", "Василівну", "Василівні"),
    entry("Вікторівна", "Вікторівни", "Вікторівні", "Вікторівну", "Вікторівні"),
    entry("Володимирівна", "Володимирівни", "Володимирівні", "Володимирівну", "Володимирівні"),
    entry("Григорівна", "Григорівни", "Григорівні", "Григорівну", "Григорівні"),
    entry("Дмитрівна", "Дмитрівни", "Дмитрівні", "Дмитрівну", "Дмитрівні"),
    entry("Іванівна", "Іванівни", "Іванівні", "Іванівну", "Іванівні"),
    entry("Миколаївна", "Миколаївни", "Миколаївні", "Миколаївну", "Миколаївні"),
    entry("Михайлівна", "Михайлівни", "Михайлівні", "Михайлівну", "Михайлівні"),
    entry("Олександрівна", "Олександрівни", "Олександрівні", "Олександрівну", "Олександрівні"),
    entry("Павлівна", "Павлівни", "Павлівні", "Павлівну", "Павлівні"),
    entry("Петрівна", "Петрівни", "Петрівні", "Петрівну", "Петрівні"),
    entry("Романівна", "Романівни", "Романівні", "Романівну", "Романівні"),
    entry("Сергіївна", "Сергіївни", "Сергіївні", "Сергіївну", "Сергіївні"),
    entry("Степанівна", "Степанівни", "Степанівні", "Степанівну", "Степанівні"),
    entry("Юріївна", "Юріївни", "Юріївні", "Юріївну", "Юріївні"),
];

static MALE_FIRST_NAME_INDEX: LazyLock<HashMap<&'static str, &'static NameDeclension>> =
    LazyLock::new(|| index(MALE_FIRST_NAMES));
static FEMALE_FIRST_NAME_INDEX: LazyLock<HashMap<&'static str, &'static NameDeclension>> =
    LazyLock::new(|| index(FEMALE_FIRST_NAMES));
static MALE_PATRONYMIC_INDEX: LazyLock<HashMap<&'static str, &'static NameDeclension>> =
    LazyLock::new(|| index(MALE_PATRONYMICS));
static FEMALE_PATRONYMIC_INDEX: LazyLock<HashMap<&'static str, &'static NameDeclension>> =
    LazyLock::new(|| index(FEMALE_PATRONYMICS));

fn index(table: &'static [NameDeclension]) -> HashMap<&'static str, &'static NameDeclension> {
    table.iter().map(|decl| (decl.nominative, decl)).collect()
}

/// Exact lookup of a first name, male table first.
pub fn lookup_first_name(name: &str) -> Option<&'static NameDeclension> {
    MALE_FIRST_NAME_INDEX
        .get(name)
        .or_else(|| FEMALE_FIRST_NAME_INDEX.get(name))
        .copied()
}

/// Exact lookup of a patronymic, male table first.
pub fn lookup_patronymic(name: &str) -> Option<&'static NameDeclension> {
    MALE_PATRONYMIC_INDEX
        .get(name)
        .or_else(|| FEMALE_PATRONYMIC_INDEX.get(name))
        .copied()
}
