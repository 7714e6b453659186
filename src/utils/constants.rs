/// Input file names, as published on the RATP and IDFM open-data portals
pub const TRAFFIC_FILE: &str = "trafic-annuel-entrant-par-station-du-reseau-ferre-2021.csv";
pub const GARES_FILE: &str = "emplacement-des-gares-idf.csv";

/// Generated map document
pub const MAP_FILE: &str = "map.html";

/// Optional configuration file looked up in the working directory
pub const SETTINGS_FILE: &str = "dashboard.toml";
pub const ENV_PREFIX: &str = "DASHBOARD";

/// Field delimiter of both datasets
pub const DEFAULT_DELIMITER: char = ';';

/// Traffic dataset columns
pub const COL_TRAFFIC: &str = "Trafic";
pub const COL_NETWORK: &str = "Réseau";
pub const COL_STATION: &str = "Station";
pub const COL_CITY: &str = "Ville";

/// Station location dataset columns
pub const COL_OPERATOR: &str = "exploitant";
pub const COL_LINE: &str = "ligne";
pub const COL_MODE: &str = "mode";
pub const COL_LONG_NAME: &str = "nom_long";
pub const COL_GEO_POINT: &str = "Geo Point";

/// Map defaults (Paris)
pub const MAP_CENTER_LAT: f64 = 48.8566;
pub const MAP_CENTER_LON: f64 = 2.3522;
pub const MAP_ZOOM: u8 = 11;

/// Dropdown defaults
pub const DEFAULT_MODE: &str = "RER";
pub const DEFAULT_NETWORK: &str = "Métro";

/// View sizes
pub const TOP_STATIONS: usize = 10;
pub const TOP_CITIES: usize = 5;

/// Server
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8050";

/// Plotly's default qualitative palette, cycled for color-by-category charts
pub const CATEGORY_PALETTE: [&str; 10] = [
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// HTTP routes
pub const ROUTE_INDEX: &str = "/";
pub const ROUTE_LINES_BY_MODE: &str = "/api/figures/lines-by-mode";
pub const ROUTE_TOP_STATIONS: &str = "/api/figures/top-stations";
pub const ROUTE_OPTIONS: &str = "/api/options";
pub const ROUTE_MAP: &str = "/map";
pub const ROUTE_HEALTH: &str = "/health";
