//! Builtin fare grid for Île-de-France pickup cities.
//!
//! Fallback rate source used when no database is configured; the live
//! deployment serves the same rows from the `city_pricing` table. Counts are
//! vouchers per formula in NORMAL, EXPRESS, URGENCE, VL_NORMAL, VL_EXPRESS
//! order.

use super::models::CityRate;

fn row(postal_code: &str, city_name: &str, vouchers: [u32; 5]) -> CityRate {
    CityRate {
        postal_code: postal_code.to_string(),
        city_name: city_name.to_string(),
        vouchers,
    }
}

/// The compiled grid, in official tariff-sheet order (Paris first, then by
/// department).
pub fn builtin_rates() -> Vec<CityRate> {
    vec![
        row("75000", "Paris", [2, 4, 7, 7, 14]),
        row("75001", "Paris 01", [2, 4, 7, 7, 14]),
        row("75002", "Paris 02", [2, 4, 7, 7, 14]),
        row("75003", "Paris 03", [3, 6, 9, 8, 18]),
        row("75004", "Paris 04", [3, 6, 9, 8, 18]),
        row("75005", "Paris 05", [3, 6, 9, 8, 18]),
        row("75006", "Paris 06", [3, 6, 9, 8, 18]),
        row("75007", "Paris 07", [2, 4, 7, 7, 14]),
        row("75008", "Paris 08", [2, 4, 7, 7, 14]),
        row("75009", "Paris 09", [2, 4, 7, 7, 14]),
        row("75010", "Paris 10", [3, 6, 9, 8, 18]),
        row("75011", "Paris 11", [3, 6, 9, 8, 18]),
        row("75012", "Paris 12", [3, 6, 9, 8, 18]),
        row("75013", "Paris 13", [3, 6, 9, 8, 18]),
        row("75014", "Paris 14", [3, 6, 9, 8, 18]),
        row("75015", "Paris 15", [2, 4, 7, 7, 14]),
        row("75016", "Paris 16", [2, 4, 7, 7, 14]),
        row("75017", "Paris 17", [2, 4, 7, 7, 14]),
        row("75018", "Paris 18", [3, 6, 9, 8, 18]),
        row("75019", "Paris 19", [3, 6, 9, 8, 18]),
        row("75020", "Paris 20", [3, 6, 9, 8, 18]),
        row("77000", "Melun", [24, 27, 30, 28, 31]),
        row("77000", "Collegien", [15, 18, 21, 19, 22]),
        row("77100", "Meaux", [20, 23, 26, 24, 27]),
        row("77170", "Brie-Comte-Robert", [20, 25, 30, 25, 30]),
        row("77000", "Noisiel", [15, 18, 21, 19, 22]),
        row("77000", "Dammarie-les-Lys", [22, 25, 28, 26, 29]),
        row("77200", "Torcy", [15, 18, 21, 19, 22]),
        row("77290", "Mitry-Mory", [14, 17, 20, 18, 21]),
        row("77300", "Fontainebleau", [30, 33, 36, 34, 37]),
        row("77350", "Le Mée-sur-Seine", [23, 26, 29, 27, 30]),
        row("77000", "Lagny-sur-Marne", [12, 15, 18, 16, 19]),
        row("77420", "Champs-sur-Marne", [10, 13, 16, 14, 17]),
        row("77000", "Marne-la-Vallee", [15, 18, 21, 19, 22]),
        row("77500", "Chelles", [12, 15, 18, 16, 19]),
        row("77600", "Bussy-Saint-Georges", [13, 16, 19, 17, 20]),
        row("77000", "Serris", [14, 17, 20, 18, 21]),
        row("77130", "Montereau-Fault-Yonne", [25, 28, 31, 29, 32]),
        row("78000", "Versailles", [9, 12, 15, 13, 16]),
        row("78130", "Les Mureaux", [15, 18, 21, 19, 22]),
        row("78000", "Le Chesnay", [8, 11, 14, 12, 15]),
        row("78000", "La Celle-Saint-Cloud", [6, 9, 12, 10, 13]),
        row("78000", "Saint-Quentin-en-Yvelines", [13, 16, 19, 17, 20]),
        row("78190", "Trappes", [16, 19, 22, 20, 23]),
        row("78200", "Mantes-la-Jolie", [15, 18, 21, 19, 22]),
        row("78300", "Poissy", [10, 13, 16, 14, 17]),
        row("78370", "Plaisir", [17, 20, 23, 21, 24]),
        row("78380", "Bougival", [8, 11, 14, 12, 15]),
        row("78400", "Chatou", [7, 10, 13, 11, 14]),
        row("78430", "Louveciennes", [8, 11, 14, 12, 15]),
        row("78500", "Sartrouville", [9, 12, 15, 13, 16]),
        row("78530", "Buc", [10, 13, 16, 14, 17]),
        row("78000", "Maisons-Laffitte", [9, 12, 15, 13, 16]),
        row("78960", "Voisins-le-Bretonneux", [14, 17, 20, 18, 21]),
        row("91000", "Évry", [15, 18, 21, 19, 22]),
        row("91070", "Bondoufle", [14, 17, 20, 18, 21]),
        row("91080", "Courcouronnes", [15, 18, 21, 19, 22]),
        row("91000", "Corbeil-Essonnes", [14, 17, 20, 18, 21]),
        row("91160", "Longjumeau", [10, 13, 16, 14, 17]),
        row("91000", "Viry-Chatillon", [10, 3, 6, 14, 5]),
        row("91190", "Gif-sur-Yvette", [6, 8, 6, 10, 6]),
        row("91200", "Athis-Mons", [8, 11, 14, 12, 15]),
        row("91000", "Juvisy", [10, 13, 16, 14, 17]),
        row("91300", "Massy", [8, 11, 14, 12, 15]),
        row("91380", "Chilly-Mazarin", [10, 13, 16, 14, 17]),
        row("91400", "Orsay", [12, 15, 18, 16, 19]),
        row("91420", "Morangis", [10, 13, 16, 14, 17]),
        row("91000", "Savigny-sur-Orge", [10, 13, 16, 14, 17]),
        row("91000", "Brunoy", [12, 15, 18, 16, 19]),
        row("91000", "Fleury-Merogis", [9, 3, 10, 4, 6]),
        row("91940", "Les Ulis", [13, 16, 19, 17, 20]),
        row("92000", "Nanterre", [5, 8, 11, 9, 12]),
        row("92100", "Boulogne-Billancourt", [2, 4, 6, 6, 9]),
        row("92200", "Neuilly-sur-Seine", [2, 4, 6, 6, 9]),
        row("92300", "Levallois-Perret", [2, 4, 6, 6, 9]),
        row("92400", "Courbevoie", [3, 6, 9, 7, 10]),
        row("92500", "Rueil-Malmaison", [5, 8, 11, 9, 12]),
        row("92600", "Asnières-sur-Seine", [3, 6, 9, 7, 10]),
        row("92700", "Colombes", [4, 7, 10, 8, 11]),
        row("92800", "Puteaux", [3, 6, 9, 7, 10]),
        row("92220", "Bagneux", [4, 7, 10, 8, 11]),
        row("92260", "Fontenay-aux-Roses", [6, 7, 5, 3, 8]),
        row("92290", "Châtenay-Malabry", [6, 9, 12, 10, 13]),
        row("92320", "Châtillon", [3, 6, 9, 7, 10]),
        row("92350", "Le Plessis-Robinson", [8, 7, 8, 5, 7]),
        row("92370", "Chaville", [6, 9, 12, 10, 13]),
        row("92430", "Marnes-la-Coquette", [9, 12, 15, 13, 16]),
        row("92110", "Clichy", [2, 4, 6, 6, 9]),
        row("92410", "Ville-d'Avray", [5, 7, 8, 7, 9]),
        row("92310", "Sèvres", [7, 8, 9, 8, 9]),
        row("92380", "Garches", [7, 10, 13, 12, 15]),
        row("92130", "Issy-les-Moulineaux", [4, 6, 8, 7, 9]),
        row("92140", "Clamart", [4, 6, 8, 7, 9]),
        row("92170", "Vanves", [4, 7, 10, 8, 11]),
        row("92190", "Meudon", [5, 7, 9, 7, 9]),
        row("92250", "La Garenne-Colombes", [4, 6, 8, 7, 9]),
        row("92270", "Bois-Colombes", [4, 6, 8, 7, 9]),
        row("93000", "Bobigny", [6, 9, 12, 10, 13]),
        row("93000", "Montreuil", [4, 7, 11, 8, 11]),
        row("93000", "Saint-Denis", [4, 7, 10, 8, 11]),
        row("93300", "Aubervilliers", [3, 6, 9, 7, 10]),
        row("93000", "Saint-Ouen", [3, 6, 9, 7, 10]),
        row("93500", "Pantin", [4, 7, 10, 7, 10]),
        row("93600", "Aulnay-sous-Bois", [9, 12, 15, 13, 16]),
        row("93700", "Drancy", [6, 9, 12, 10, 13]),
        row("93800", "Épinay-sur-Seine", [8, 11, 14, 12, 15]),
        row("93120", "La Courneuve", [5, 8, 11, 9, 12]),
        row("93150", "Le Blanc-Mesnil", [8, 11, 14, 12, 15]),
        row("93190", "Livry-Gargan", [8, 11, 14, 12, 15]),
        row("93220", "Gagny", [9, 12, 15, 13, 16]),
        row("93230", "Romainville", [6, 9, 12, 10, 13]),
        row("93240", "Stains", [4, 8, 11, 9, 12]),
        row("93250", "Villemomble", [8, 11, 14, 12, 15]),
        row("93260", "Les Lilas", [6, 8, 11, 9, 12]),
        row("93310", "Le Pré-Saint-Gervais", [6, 8, 11, 9, 12]),
        row("93320", "Les Pavillons-sous-Bois", [8, 11, 14, 12, 15]),
        row("93330", "Neuilly-sur-Marne", [8, 11, 14, 12, 15]),
        row("93340", "Le Raincy", [8, 11, 14, 12, 15]),
        row("93350", "Le Bourget", [6, 9, 12, 10, 13]),
        row("93360", "Neuilly-Plaisance", [8, 11, 14, 12, 15]),
        row("93000", "Montfermeil", [9, 12, 15, 13, 16]),
        row("93380", "Pierrefitte-sur-Seine", [7, 10, 13, 11, 14]),
        row("93390", "Clichy-sous-Bois", [8, 11, 14, 12, 15]),
        row("93410", "Vaujours", [8, 11, 14, 12, 15]),
        row("93420", "Villepinte", [9, 12, 15, 13, 16]),
        row("93430", "Villetaneuse", [7, 10, 13, 11, 14]),
        row("93440", "Dugny", [6, 9, 12, 10, 13]),
        row("93450", "L'Île-Saint-Denis", [5, 8, 11, 9, 12]),
        row("93460", "Gournay-sur-Marne", [8, 11, 14, 12, 15]),
        row("93470", "Coubron", [9, 12, 15, 13, 16]),
        row("94000", "Créteil", [7, 10, 13, 11, 14]),
        row("94210", "Saint-Maur-Des-Fossés", [8, 11, 14, 12, 15]),
        row("94110", "Arcueil", [6, 7, 10, 8, 11]),
        row("94120", "Fontenay-sous-Bois", [7, 10, 13, 11, 14]),
        row("94130", "Nogent-sur-Marne", [8, 11, 14, 12, 15]),
        row("94140", "Alfortville", [5, 8, 11, 9, 12]),
        row("94150", "Rungis", [7, 10, 13, 11, 14]),
        row("94160", "Saint-Mandé", [4, 7, 10, 8, 11]),
        row("94200", "Ivry-sur-Seine", [4, 7, 10, 8, 11]),
        row("94220", "Charenton-le-Pont", [4, 7, 10, 8, 11]),
        row("94230", "Cachan", [6, 7, 10, 8, 11]),
        row("94240", "L'Haÿ-les-Roses", [5, 8, 11, 9, 12]),
        row("94250", "Gentilly", [6, 8, 11, 9, 12]),
        row("94260", "Fresnes", [6, 8, 11, 9, 12]),
        row("94250", "Le Kremlin-Bicêtre", [4, 7, 10, 8, 11]),
        row("94000", "Villeneuve-le-Roi", [7, 10, 13, 11, 14]),
        row("94300", "Vincennes", [4, 7, 10, 8, 11]),
        row("94310", "Orly", [7, 10, 13, 11, 14]),
        row("94320", "Thiais", [7, 10, 13, 11, 14]),
        row("94340", "Joinville-le-Pont", [8, 11, 14, 12, 15]),
        row("94350", "Villiers-sur-Marne", [8, 11, 14, 12, 15]),
        row("94400", "Vitry-sur-Seine", [5, 8, 11, 9, 12]),
        row("94410", "Saint-Maurice", [6, 8, 11, 9, 12]),
        row("94420", "Le Plessis-Trévise", [8, 11, 14, 12, 15]),
        row("94430", "Chennevières-sur-Marne", [8, 11, 14, 12, 15]),
        row("94000", "Marolles-en-Brie", [9, 12, 15, 13, 16]),
        row("94450", "Limeil-Brevannes", [8, 11, 14, 12, 15]),
        row("94460", "Valenton", [7, 10, 13, 11, 14]),
        row("94000", "Boissy-Saint-Leger", [8, 11, 14, 12, 15]),
        row("94490", "Ormesson-sur-Marne", [8, 11, 14, 12, 15]),
        row("94500", "Champigny-sur-Marne", [7, 10, 13, 11, 14]),
        row("94510", "La Queue-en-Brie", [9, 12, 15, 13, 16]),
        row("94000", "Mandres-les-Roses", [9, 12, 15, 13, 16]),
        row("94550", "Chevilly-Larue", [6, 8, 11, 9, 12]),
        row("94600", "Choisy-le-Roi", [7, 10, 13, 11, 14]),
        row("94700", "Maisons-Alfort", [5, 8, 11, 9, 12]),
        row("94800", "Villejuif", [4, 7, 10, 8, 11]),
        row("94370", "Noiseau", [9, 12, 15, 13, 16]),
        row("95000", "Cergy-Pontoise", [15, 18, 21, 19, 22]),
        row("95100", "Argenteuil", [7, 10, 13, 11, 14]),
        row("95000", "Ermont", [10, 13, 16, 14, 17]),
        row("95000", "Franconville", [6, 7, 6, 10, 6]),
        row("95140", "Garges-lès-Gonesse", [6, 8, 6, 10, 6]),
        row("95000", "Taverny", [10, 13, 16, 14, 17]),
        row("95000", "Montmorency", [6, 7, 6, 10, 6]),
        row("95170", "Deuil-la-Barre", [9, 3, 10, 4, 6]),
        row("95190", "Goussainville", [10, 13, 16, 14, 17]),
        row("95200", "Sarcelles", [13, 16, 19, 17, 20]),
        row("95210", "Saint-Gratien", [9, 12, 15, 13, 16]),
        row("95220", "Herblay", [10, 13, 16, 14, 17]),
        row("95000", "Soisy-sous-Montmorency", [10, 13, 16, 14, 17]),
        row("95000", "Cormeilles-en-Parisis", [8, 11, 14, 12, 15]),
        row("95000", "Beauchamp", [10, 13, 16, 14, 17]),
        row("95000", "Montmagny", [7, 10, 13, 11, 14]),
        row("95000", "Viarmes", [12, 15, 18, 16, 19]),
        row("95000", "Jouy-le-Moutier", [12, 15, 18, 16, 19]),
        row("95290", "L'Isle-Adam", [12, 15, 18, 16, 19]),
        row("95300", "Pontoise", [15, 18, 21, 19, 22]),
        row("95310", "Saint-Ouen-l'Aumône", [14, 17, 20, 18, 21]),
        row("95000", "Saint-Prix", [12, 15, 18, 16, 19]),
        row("95330", "Domont", [10, 13, 16, 14, 17]),
        row("95000", "Persan", [13, 16, 19, 17, 20]),
        row("95350", "Saint-Brice-sous-Forêt", [10, 13, 16, 14, 17]),
        row("95000", "Montigny-les-Cormeilles", [10, 13, 16, 14, 17]),
        row("95000", "Louvres", [12, 15, 18, 16, 19]),
        row("95000", "Villiers-le-Bel", [13, 16, 19, 17, 20]),
        row("95000", "Groslay", [6, 10, 6, 10, 6]),
        row("95000", "Magny-en-Vexin", [17, 20, 23, 21, 24]),
        row("95000", "Auvers-sur-Oise", [12, 15, 18, 16, 19]),
        row("95440", "Écouen", [10, 13, 16, 14, 17]),
        row("95000", "Us", [17, 20, 23, 21, 24]),
        row("95460", "Ézanville", [10, 13, 16, 14, 17]),
        row("95000", "Fosses", [12, 15, 18, 16, 19]),
        row("95000", "Pierrelaye", [10, 13, 16, 14, 17]),
        row("95000", "Vaudherland", [13, 16, 19, 17, 20]),
        row("95000", "Gonesse", [10, 13, 16, 14, 17]),
        row("95000", "Vemars", [12, 15, 18, 16, 19]),
        row("95000", "Osny", [15, 18, 21, 19, 22]),
        row("95000", "La Frette-sur-Seine", [8, 11, 14, 12, 15]),
        row("95540", "Méry-sur-Oise", [12, 15, 18, 16, 19]),
        row("95000", "Bessancourt", [12, 15, 18, 16, 19]),
        row("95000", "Baillet-en-France", [12, 15, 18, 16, 19]),
        row("95000", "Attainville", [12, 15, 18, 16, 19]),
        row("95000", "Andilly", [7, 10, 13, 11, 14]),
        row("95000", "Presles", [12, 15, 18, 16, 19]),
        row("95000", "Eaubonne", [12, 15, 18, 16, 19]),
        row("95610", "Éragny", [12, 15, 18, 16, 19]),
        row("95000", "Parmain", [12, 15, 18, 16, 19]),
        row("95000", "Meriel", [12, 15, 18, 16, 19]),
        row("95000", "Marly-la-Ville", [12, 15, 18, 16, 19]),
        row("95650", "Boissy-l'Aillerie", [15, 18, 21, 19, 22]),
        row("95000", "Champagne-sur-Oise", [12, 15, 18, 16, 19]),
        row("95000", "Montlouis", [13, 16, 19, 17, 20]),
        row("95000", "Labbeville", [17, 20, 23, 21, 24]),
        row("95700", "Roissy-en-France", [12, 15, 18, 16, 19]),
        row("95000", "Bray-et-Lu", [17, 20, 23, 21, 24]),
        row("95000", "Le Plessis-Luzarches", [12, 15, 18, 16, 19]),
        row("95880", "Enghien-les-Bains", [9, 12, 15, 13, 16]),
        row("95000", "Frepillon", [12, 15, 18, 16, 19]),
        row("95000", "Chars", [17, 20, 23, 21, 24]),
        row("95000", "Valmondois", [12, 15, 18, 16, 19]),
        row("95000", "Saint-Clair-sur-Epte", [17, 20, 23, 21, 24]),
        row("95000", "Chersy", [17, 20, 23, 21, 24]),
        row("95000", "Moussy-le-Neuf", [12, 15, 18, 16, 19]),
        row("95800", "Cergy", [15, 18, 21, 19, 22]),
        row("95000", "Epernay-sur-Oise", [12, 15, 18, 16, 19]),
        row("95820", "Bruyères-sur-Oise", [12, 15, 18, 16, 19]),
        row("95000", "Cormeilles-en-Vexin", [17, 20, 23, 21, 24]),
        row("95000", "Vallangoujard", [17, 20, 23, 21, 24]),
        row("95000", "Mareil-sur-Ourcq", [17, 20, 23, 21, 24]),
        row("95000", "Beaumont-sur-Oise", [12, 15, 18, 16, 19]),
        row("95000", "Bernes-sur-Oise", [12, 15, 18, 16, 19]),
    ]
}
