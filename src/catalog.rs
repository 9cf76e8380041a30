//! Fixed compile-time catalog of curriculum works and the default list.

use hashbrown::HashMap;

use crate::{
    types::{Genre, Section, WorkId},
    work::{Work, work_id},
};

use crate::types::Genre::{Drama, Poetry, Prose};
use crate::types::Section::{CzechModern, To18thCentury, To19thCentury, WorldModern};

// The full curriculum sheet. Rows are (author, title, genre, section) and the
// order matches the printed sheet, grouped by section.
const CURRICULUM: &[(&str, &str, Genre, Section)] = &[
    ("Dante Alighieri", "Božská komedie", Poetry, To18thCentury),
    ("Giovanni Boccaccio", "Dekameron", Prose, To18thCentury),
    ("Jan Amos Komenský", "Labyrint světa a ráj srdce", Prose, To18thCentury),
    ("William Shakespeare", "Hamlet", Drama, To18thCentury),
    ("Molière", "Lakomec", Drama, To18thCentury),
    ("William Shakespeare", "Othello", Drama, To18thCentury),
    ("Daniel Defoe", "Robinson Crusoe", Prose, To18thCentury),
    ("William Shakespeare", "Romeo a Julie", Drama, To18thCentury),
    ("Carlo Goldoni", "Sluha dvou pánů", Drama, To18thCentury),
    ("Johann Wolfgang Goethe", "Utrpení mladého Werthera", Prose, To18thCentury),
    ("Molière", "Zdravý nemocný", Drama, To18thCentury),
    ("William Shakespeare", "Zkrocení zlé ženy", Drama, To18thCentury),
    ("Božena Němcová", "Babička", Prose, To19thCentury),
    ("Božena Němcová", "Divá Bára", Prose, To19thCentury),
    ("Viktor Hugo", "Chrám Matky Boží v Paříži", Prose, To19thCentury),
    ("Karel Havlíček Borovský", "Král Lávra", Poetry, To19thCentury),
    ("Karel Jaromír Erben", "Kytice", Poetry, To19thCentury),
    ("Karel Hynek Mácha", "Máj", Poetry, To19thCentury),
    ("Jaroslav Vrchlický", "Noc na Karlštejně", Drama, To19thCentury),
    ("Svatopluk Čech", "Pán Brouček - výlet", Prose, To19thCentury),
    ("Gustave Flaubert", "Paní Bovaryová", Prose, To19thCentury),
    ("Jan Neruda", "Povídky malostranské", Prose, To19thCentury),
    ("Nikolaj Vasiljevič Gogol", "Revizor", Drama, To19thCentury),
    ("Josef Kajetán Tyl", "Strakonický dudák", Drama, To19thCentury),
    ("Karel Havlíček Borovský", "Tyrolské elegie", Poetry, To19thCentury),
    ("Edgar Allan Poe", "Vraždy v ulici Morgue", Prose, To19thCentury),
    ("Božena Němcová", "V zámku a v podzámčí", Prose, To19thCentury),
    ("Fjodor Michajlovič Dostojevskij", "Zločin a trest", Prose, To19thCentury),
    ("Erich Maria Remarque", "Cesta zpátky", Prose, WorldModern),
    ("Mika Waltari", "Egypťan Sinuhet", Prose, WorldModern),
    ("George Orwell", "Farma zvířat", Prose, WorldModern),
    ("Joseph Heller", "Hlava XXII", Prose, WorldModern),
    ("Alberto Moravia", "Horalka", Prose, WorldModern),
    ("Umberto Eco", "Jméno růže", Prose, WorldModern),
    ("Gabriel García Márquez", "Kronika ohlášené smrti", Prose, WorldModern),
    ("Vladimir Nabokov", "Lolita", Prose, WorldModern),
    ("Ray Bradbury", "Marťanská kronika", Prose, WorldModern),
    ("Jack Kerouac", "Na cestě", Prose, WorldModern),
    ("Erich Maria Remarque", "Na západní frontě klid", Prose, WorldModern),
    ("Romain Rolland", "Petr a Lucie", Prose, WorldModern),
    ("Ernest Hemingway", "Sbohem, armádo", Prose, WorldModern),
    ("Ernest Hemingway", "Stařec a moře", Prose, WorldModern),
    ("William Styron", "Sophiina volba", Prose, WorldModern),
    ("Erich Maria Remarque", "Tři kamarádi", Prose, WorldModern),
    ("Francis Scott Fitzgerald", "Veliký Gatsby", Prose, WorldModern),
    ("Michal Viewegh", "Báječná léta pod psa", Prose, CzechModern),
    ("Karel Čapek", "Bílá nemoc", Drama, CzechModern),
    ("Karel Poláček", "Bylo nás pět", Prose, CzechModern),
    ("Zdeněk Svěrák a Ladislav Smoljak", "České nebe", Drama, CzechModern),
    ("Ota Pavel", "Jak jsem potkal ryby", Prose, CzechModern),
    ("Květa Legátová", "Jozova Hanule", Prose, CzechModern),
    ("Pavel Kohout", "Katyně", Prose, CzechModern),
    ("Viktor Dyk", "Krysař", Prose, CzechModern),
    ("Vítězslav Nezval", "Manon Lescaut", Drama, CzechModern),
    ("Vladislav Vančura", "Markéta Lazarová", Prose, CzechModern),
    ("Radek John", "Memento", Prose, CzechModern),
    ("Arnošt Lustig", "Modlitba pro Kateřinu Horovitzovou", Prose, CzechModern),
    ("Rudolf Křesťan", "Myš v 11. patře", Prose, CzechModern),
    ("Ivan Olbracht", "Nikola Šuhaj loupežník", Prose, CzechModern),
    ("Bohumil Hrabal", "Obsluhoval jsem anglického krále", Prose, CzechModern),
    ("Bohumil Hrabal", "Ostře sledované vlaky", Prose, CzechModern),
    ("Jaroslav Hašek", "Osudy dobrého vojáka Švejka za světové války", Prose, CzechModern),
    ("Karel Čapek", "Povídky z jedné a druhé kapsy", Prose, CzechModern),
    ("Franz Kafka", "Proměna", Prose, CzechModern),
    ("Jan Otčenášek", "Romeo, Julie a tma", Prose, CzechModern),
    ("Karel Čapek", "R.U.R.", Drama, CzechModern),
    ("Petr Bezruč", "Slezské písně", Poetry, CzechModern),
    ("Ota Pavel", "Smrt krásných srnců", Prose, CzechModern),
    ("Ladislav Fuks", "Spalovač mrtvol", Prose, CzechModern),
    ("Michal Viewegh", "Švédské stoly aneb Jací jsme", Prose, CzechModern),
    ("Karel Čapek", "Trapné povídky", Prose, CzechModern),
    ("Michal Viewegh", "Účastníci zájezdu", Prose, CzechModern),
    ("Karel Čapek", "Válka s Mloky", Prose, CzechModern),
    ("Karel Čapek", "Výlet do Španěl", Prose, CzechModern),
    ("Josef Škvorecký", "Zbabělci", Prose, CzechModern),
    ("Viktor Dyk", "Zmoudření Dona Quijota", Drama, CzechModern),
    ("Milan Kundera", "Žert", Prose, CzechModern),
];

// Pre-selected default list, constructed to satisfy every rule. Each pair
// must also appear in CURRICULUM.
const DEFAULT_TWENTY: &[(&str, &str)] = &[
    ("Molière", "Lakomec"),
    ("Carlo Goldoni", "Sluha dvou pánů"),
    ("Božena Němcová", "Babička"),
    ("Karel Havlíček Borovský", "Král Lávra"),
    ("Karel Jaromír Erben", "Kytice"),
    ("Nikolaj Vasiljevič Gogol", "Revizor"),
    ("Karel Havlíček Borovský", "Tyrolské elegie"),
    ("Edgar Allan Poe", "Vraždy v ulici Morgue"),
    ("Erich Maria Remarque", "Cesta zpátky"),
    ("Erich Maria Remarque", "Na západní frontě klid"),
    ("Romain Rolland", "Petr a Lucie"),
    ("Francis Scott Fitzgerald", "Veliký Gatsby"),
    ("Zdeněk Svěrák a Ladislav Smoljak", "České nebe"),
    ("Ota Pavel", "Jak jsem potkal ryby"),
    ("Bohumil Hrabal", "Obsluhoval jsem anglického krále"),
    ("Bohumil Hrabal", "Ostře sledované vlaky"),
    ("Jaroslav Hašek", "Osudy dobrého vojáka Švejka za světové války"),
    ("Franz Kafka", "Proměna"),
    ("Karel Čapek", "R.U.R."),
    ("Ota Pavel", "Smrt krásných srnců"),
];

/// Immutable catalog of all curriculum works, materialized once at startup
/// and passed by reference to every component that needs it.
#[derive(Debug)]
pub struct Catalog {
    works: Vec<Work>,
    by_id: HashMap<WorkId, usize>,
    default_ids: Vec<WorkId>,
}

impl Catalog {
    /// Materializes the built-in curriculum catalog.
    pub fn builtin() -> Self {
        let works: Vec<Work> = CURRICULUM
            .iter()
            .map(|&(author, title, genre, section)| Work {
                author: author.to_string(),
                title: title.to_string(),
                genre,
                section,
            })
            .collect();

        let mut by_id = HashMap::with_capacity(works.len());
        for (idx, work) in works.iter().enumerate() {
            by_id.insert(work.id(), idx);
        }

        let default_ids = DEFAULT_TWENTY
            .iter()
            .map(|&(author, title)| work_id(author, title))
            .collect();

        Self {
            works,
            by_id,
            default_ids,
        }
    }

    /// All works in sheet order.
    pub fn works(&self) -> &[Work] {
        &self.works
    }

    /// Number of works in the catalog.
    pub fn len(&self) -> usize {
        self.works.len()
    }

    /// Returns true when the catalog holds no works.
    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }

    /// Looks up a work by its derived id.
    pub fn get(&self, id: &str) -> Option<&Work> {
        self.by_id.get(id).map(|&idx| &self.works[idx])
    }

    /// Sheet position of a work, by id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Ids of the built-in default list, in presentation order.
    pub fn default_ids(&self) -> &[WorkId] {
        &self.default_ids
    }

    /// Resolved works of the built-in default list.
    pub fn default_list(&self) -> Vec<&Work> {
        self.default_ids
            .iter()
            .filter_map(|id| self.get(id))
            .collect()
    }
}
