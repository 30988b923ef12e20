//! Static reference data: category spellings, code tables and table lists.

use std::ops::RangeInclusive;

use crate::clean::CategoryMap;

pub const REPORT_YEARS: RangeInclusive<i64> = 1994..=2016;

/// Spellings of each fuel seen in the free-text `fuel` column of `f1_fuel`.
pub const FERC1_FUEL_STRINGS: CategoryMap = &[
    (
        "coal",
        &[
            "coal", "coal-subbit", "lignite", "coal(sb)", "coal (sb)", "coal-lignite",
            "coke", "coa", "lignite/coal", "coal - subbit", "coal-subb", "coal-sub",
            "coal-lig", "coal-sub bit", "coals", "ciak", "petcoke", "coal.oil",
            "coal/gas", "bit coal", "coal-unit #3", "coal-subbitum", "coal tons",
            "coal mcf", "coal unit #3", "pet. coke", "coal-u3", "coal&coke", "tons",
        ],
    ),
    (
        "oil",
        &[
            "oil", "#6 oil", "#2 oil", "fuel oil", "jet", "no. 2 oil", "no.2 oil",
            "no.6& used", "used oil", "oil-2", "oil (#2)", "diesel oil", "residual oil",
            "# 2 oil", "resid. oil", "tall oil", "oil/gas", "no.6 oil", "oil-fuel",
            "oil-diesel", "oil / gas", "oil bbls", "oil bls", "no. 6 oil", "#1 kerosene",
            "diesel", "no. 2 oils", "blend oil", "#2oil diesel", "#2 oil-diesel",
            "# 2  oil", "light oil", "heavy oil", "gas.oil", "#2", "2", "6", "bbl",
            "no 2 oil", "no 6 oil", "#1 oil", "#6", "oil-kero", "oil bbl", "biofuel",
            "no 2", "kero", "#1 fuel oil", "no. 2  oil", "blended oil", "no 2. oil",
            "# 6 oil", "nno. 2 oil", "#2 fuel", "oill", "oils", "gas/oil", "no.2 oil gas",
            "#2 fuel oil", "oli", "oil (#6)", "oil/diesel", "2 oil", "#6 hvy oil", "jet fuel",
            "diesel/compos", "oil-8", "oil {6}", "oil-unit #1", "bbl.", "oil.",
            "oil #6", "oil (6)", "oil(#2)", "oil-unit1&2", "oil-6", "#2 fue oil",
            "dielel oil", "dielsel oil", "#6 & used", "crude", "diesel-#2", "#2 diesel",
        ],
    ),
    (
        "gas",
        &[
            "gas", "methane", "natural gas", "blast gas", "gas mcf", "propane", "prop",
            "natural  gas", "nat.gas", "nat gas", "nat. gas", "natl gas", "ga",
            "gas`", "syngas", "ng", "mcf", "blast gaa", "nat  gas", "gac", "syngass",
            "prop.", "natural", "coal.gas", "n. gas", "lp gas", "natuaral gas", "coke gas",
            "gas #2016", "propane**", "* propane", "propane **", "gas expander",
            "gas ct", "# 6 gas", "#6 gas", "coke oven gas",
        ],
    ),
    ("solar", &["solar", "photovoltaic", "pv"]),
    ("wind", &["wind"]),
    ("hydro", &["hydro", "water"]),
    (
        "nuclear",
        &[
            "nuclear", "grams of uran", "grams of", "grams of  ura", "grams", "nucleur",
            "nulear", "nucl", "nucleart", "nucelar", "gr.uranium", "grams of urm",
            "nuclear (9)", "nulcear", "nuc", "gr. uranium", "nuclear mw da", "grams of ura",
        ],
    ),
    (
        "waste",
        &[
            "tires", "tire", "refuse", "switchgrass", "wood waste", "woodchips", "biomass",
            "wood", "wood chips", "rdf", "tires/refuse", "tire refuse", "waste oil", "waste",
            "woodships", "tire chips",
        ],
    ),
    ("steam", &["steam", "purch steam", "purch. steam", "steam purch"]),
    ("unknown", &["", "other", "unknown", "none", "n/a", "na"]),
];

pub const FERC1_FUEL_UNIT_STRINGS: CategoryMap = &[
    (
        "ton",
        &[
            "toms", "taons", "tones", "col-tons", "toncoaleq", "coal", "tons coal eq",
            "coal-tons", "ton", "tons", "tons coal", "coal-ton", "tires-tons", "coal tons -2 ",
            "coal tons 200", "ton-2000", "coal tons -2", "coal tons", "coal-tone", "tire-ton",
            "tire-tons", "ton coal eqv", "tos", "coal tons - 2", "c. t.", "c.t.", "t",
            "toncoalequiv",
        ],
    ),
    (
        "mcf",
        &[
            "mcf", "mcf's", "mcfs", "mcf.", "gas mcf", "\"gas\" mcf", "gas-mcf", "mfc",
            "mct", " mcf", "msfc", "mlf", "mscf", "mci", "mcl", "mcg", "m.cu.ft.",
            "m.cu.ft", "kcf", "(mcf)", "mcf *(4)", "mcf00", "m.cu.ft..",
        ],
    ),
    (
        "bbl",
        &[
            "barrel", "bbls", "bbl", "barrels", "bbrl", "bbl.", "bbls.", "oil 42 gal",
            "oil-barrels", "barrrels", "bbl-42 gal", "oil-barrel", "bb.", "barrells",
            "bar", "bbld", "oil- barrel", "bbl .", "barels", "barrell",
            "berrels", "bb", "bbl.s", "oil-bbl", "bls", "bbl:", "barrles", "blb", "propane-bbl",
        ],
    ),
    ("gal", &["gallons", "gal.", "gals", "gals.", "gallon", "gal", "galllons"]),
    (
        "kgal",
        &[
            "oil(1000 gal)", "oil(1000)", "oil (1000)", "oil(1000gal)", "oil(1000 gals)",
            "1000 gals", "1000 gal", "1000 gallons", "1000 gal.", "m gallons",
        ],
    ),
    (
        "gramsU",
        &[
            "gram", "grams", "gm u", "grams u235", "grams u-235", "grams of uran",
            "grams: u-235", "grams:u-235", "grams:u235", "grams u308", "grams: u235",
            "grams of", "grams - n/a", "gms uran", "s e uo2 grams", "gms uranium",
            "grams of urm", "gms. of uran", "grams (100%)", "grams v-235", "se uo2 grams",
        ],
    ),
    (
        "kgU",
        &[
            "kg of uranium", "kg uranium", "kilg. u-235", "kg u-235", "kilograms-u23",
            "kg", "kilograms u-2", "kilograms", "kg of", "kg-u-235", "kilgrams",
            "kilogr. u235", "uranium kg", "kg uranium25", "kilogr. u-235", "kg uranium 25",
            "kilgr. u-235", "kguranium 25", "kg-u235",
        ],
    ),
    ("klbs", &["k lbs.", "k lbs", "1000 lbs"]),
    (
        "mmbtu",
        &[
            "mmbtu", "mmbtus", "mbtus", "(mmbtu)", "mmbtu's", "mmbtu.", "mmbtu ", "mmbtu's ",
            "mbtu", "mmbt",
        ],
    ),
    (
        "mwdth",
        &[
            "mwd therman", "mw days-therm", "mwd thrml", "mwd thermal", "mwd/mtu",
            "mw days", "mwdth", "mwd", "mw day", "dth", "mwdaysthermal", "mw day therml",
            "mw days thrml", "nuclear mwd", "mmwd", "mw day/therml", "mw days/therm",
            "mw days (th", "ermal)",
        ],
    ),
    ("mwhth", &["mwh them", "mwh threm", "nwh therm", "mwhth", "mwh therm", "mwh"]),
    ("unknown", &["", "1265", "mwh units", "composite", "therms", "n/a", "mbtu/kg", "uranium 235", "oil", "ccf", "2261", "uo2", "(7)", "oil #2", "oil #6", "\u{fffd}", "0", "ft3"]),
];

/// Construction type of FERC 1 steam plants.
pub const FERC1_TYPE_CONST_STRINGS: CategoryMap = &[
    (
        "outdoor",
        &[
            "outdoor", "outdoor boiler", "full outdoor", "outdoor boiler", "outdoor boilers",
            "outboilers", "fuel outdoor", "full outdoor", "outdoors", "outdoor",
            "boiler outdoor& full", "boiler outdoor&full", "outdoor boiler& full",
            "full -outdoor", "outdoor steam", "outdoor boiler", "ob", "outdoor automatic",
            "outdoor repower", "full outdoor boiler", "fo", "outdoor boiler & ful",
            "full-outdoor", "fuel outdoor", "outoor", "outdoor", "outdoor  boiler&full",
            "boiler outdoor &full", "outdoor boiler &full", "boiler outdoor & ful",
            "outdoor-boiler", "outdoor - boiler", "outdoor const.", "4 outdoor boilers",
            "3 outdoor boilers", "full outdoor", "full outdoors", "full oudoors",
            "outdoor (auto oper)", "outside boiler", "outdoor boiler&full", "outdoor hrsg",
            "outdoor hrsg", "outdoor-steel encl.", "boiler-outdr & full", "con.& full outdoor",
            "partial outdoor", "outdoor (auto. oper)", "outdoor (auto.oper)", "outdoor construction",
            "1 outdoor boiler", "2 outdoor boilers", "outdoor enclosure", "2 outoor boilers",
            "boiler outdr.& full", "boiler outdr. & full", "ful outdoor", "outdoor-steel",
            "outdoor-steel enclos",
        ],
    ),
    (
        "semioutdoor",
        &[
            "more than 50% outdoo", "more than 50% outdos", "over 50% outdoor", "over 50% outdoors",
            "semi-outdoor", "semi - outdoor", "semi outdoor", "semi-enclosed",
            "semi-outdoor boiler", "semi outdoor boiler", "semi- outdoor", "semi - outdoors",
            "semi -outdoor", "conven & semi-outdr", "conv & semi-outdoor", "conv & semi- outdoor",
            "convent. semi-outdr", "conv. semi outdoor", "conv(u1)/semiod(u2)",
            "conv u1/semi-od u2", "conv-one blr-semi-od", "convent semioutdoor",
            "conv. u1/semi-od u2", "conv - 1 blr semi od", "conv. ui/semi-od u2",
            "conv-1 blr semi-od", "conven. semi-outdoor", "conv semi-outdoor", "u1-conv./u2-semi-od",
            "u1-conv./u2-semi -od", "convent. semi-outdoo", "u1-conv. / u2-semi", "conven & semi-outdr",
            "semi -outdoor", "outdr & conventnl", "conven. full outdoor", "conv. & outdoor blr",
            "conv. & outdoor blr.", "conv. & outdoor boiler", "conv. & outdr boiler",
            "conv. & out boiler", "convntl,outdoor blr", "outdoor & conv.", "2 conv., 1 out. boil",
            "outdoor/conventional", "conv. boiler outdoor", "conv-one boiler-outd", "conventional outdoor",
            "conventional outdor", "conv. outdoor boiler", "conv.outdoor boiler", "conventional outdr.",
            "conven,outdoorboiler", "conven full outdoor", "conven,full outdoor", "1 out boil, 2 conv",
            "conv. & full outdoor", "conv. & outdr. boilr", "conv outdoor boiler", "convention. outdoor",
            "conv. sem. outdoor", "convntl, outdoor blr", "conv & outdoor boil", "conv & outdoor boil.",
            "outdoor & conv", "conv. broiler outdoor", "1 out boilr, 2 conv", "conv.& outdoor boil.",
            "conven,outdr.boiler", "conven,outdr boiler", "outdoor & conventil", "1 out boilr 2 conv",
            "conv & outdr. boilr", "conven, full outdoor", "conven full outdr.", "conven, full outdr.",
            "conv/outdoor boiler", "convnt'l outdr boilr", "1 out boil 2 conv", "conv full outdoor",
            "conven, outdr boiler", "conventional/outdoor", "conv&outdoor boiler", "outdoor & convention",
            "conv & outdoor boilr", "conv & full outdoor", "convntl. outdoor blr", "conv - ob",
            "1conv'l/2odboilers", "2conv'l/1odboiler", "conv-ob", "conv.-ob", "1 conv/ 2odboilers",
            "2 conv /1 odboilers", "conv- ob", "conv -ob", "con sem outdoor", "cnvntl, outdr, boilr",
            "less than 50% outdoo", "under 50% outdoor", "under 50% outdoors", "1cnvntnl/2odboilers",
            "2cnvntnl1/1odboiler", "con & ob", "combination (b)", "indoor & outdoor",
            "conven. blr. & full", "conv. & otdr. blr.", "combination", "indoor and outdoor",
            "conven boiler & full", "2conv'l/10dboiler", "4 indor/outdr boiler", "4 indr/outdr boilerr",
            "4 indr/outdr boiler", "indoor & outdoof",
        ],
    ),
    (
        "conventional",
        &[
            "conventional", "conventional", "conventional boiler", "conv-b", "conventionall",
            "convention", "conventional", "coventional", "conven full boiler", "c0nventional",
            "conventtional", "convential", "underground", "conventional bulb", "conventrional",
            "*conventional", "convential", "convetional", "conventioanl", "conventioinal",
            "conventaional", "indoor construction", "convenional", "conventional steam",
            "conventinal", "convntional", "conventionl", "conventionsl", "conventiional",
            "convntl steam plants", "indoor const.", "full indoor", "indoor", "indoor automatic",
            "indoor boiler", "(peak load) indoor", "conventionl,indoor", "conventionl, indoor",
            "conventional, indoor", "comb. cycle indoor", "3 indoor boiler", "2 indoor boilers",
            "1 indoor boiler", "2 indoor boiler", "3 indoor boilers", "fully contained",
            "conv - b", "conventional/boiler", "cnventional", "comb. cycle indooor", "sonventional",
        ],
    ),
];

pub const FERC1_PLANT_KIND_STRINGS: CategoryMap = &[
    (
        "steam",
        &[
            "coal", "steam", "steam units 1 2 3", "steam units 4 5", "steam fossil", "steam turbine",
            "steam a", "steam 100", "steam units 1 2 3", "steams", "steam 1", "steam retired 2013",
            "stream", "steam units 1,2,3", "steam units 4&5", "steam units 4&6", "steam conventional",
            "unit total-steam", "unit total steam", "*resp. share steam", "resp. share steam",
            "steam (see note 1,", "steam (see note 3)", "mpc 50%share steam", "40% share steam",
            "steam (2)", "steam (3)", "steam (4)", "steam (5)", "steam (6)", "steam (7)", "steam (8)",
            "steam units 1 and 2", "steam units 3 and 4", "steam (note 1)", "steam (retired)",
            "steam (leased)", "coal-fired steam", "oil-fired steam", "steam/fossil", "steam (a,b)",
            "steam (a)", "stean", "steam-internal comb", "steam (see notes)", "steam units 4 & 6",
            "resp share stm note3", "mpc50% share steam", "mpc40%share steam", "steam - 64%",
            "steam - 100%", "steam (1) & (2)", "resp share st note3", "mpc 50% shares steam",
            "steam-64%", "steam-100%", "steam (see note 1)", "mpc 50% share steam", "steam units 1, 2, 3",
            "steam units 4, 5", "steam (2)", "steam (1)", "steam 4, 5", "steam - 72%", "steam (incl i.c.)",
            "steam- 72%", "steam;retired - 2013", "respondent's sh.-st.", "respondent's sh-st",
            "40% share steam", "resp share stm note3", "mpc50% share steam", "resp share st note 3",
            "\u{0008}steam (1)",
        ],
    ),
    (
        "combustion_turbine",
        &[
            "combustion turbine", "gt", "gas turbine", "gas turbine # 1", "gas turbine",
            "gas turbine (note 1)", "gas turbines", "simple cycle", "combustion turbine",
            "comb.turb.peak.units", "gas turbine", "combustion turbine", "com turbine peaking",
            "gas turbine peaking", "comb turb peaking", "combustine turbine", "comb. turine",
            "conbustion turbine", "combustine turbine", "gas turbine (leased)", "combustion tubine",
            "gas turb", "gas turbine peaker", "gtg/gas", "simple cycle turbine", "gas-turbine",
            "gas turbine-simple", "gas turbine - note 1", "gas turbine #1", "simple cycle",
            "gasturbine", "combustionturbine", "gas turbine (2)", "comb turb peak units",
            "jet engine", "jet powered turbine", "*gas turbine", "gas turb.(see note5)",
            "gas turb. (see note", "combutsion turbine", "combustion turbin", "gas turbine-unit 2",
            "gas - turbine", "comb turbine peaking", "gas expander turbine", "jet turbine",
            "gas turbin (lease", "gas turbine (leased", "gas turbine/int. cm", "comb.turb-gas oper.",
            "comb.turb.gas/oil op", "comb.turb.oil oper.", "jet", "comb. turbine (a)",
            "gas turb.(see notes)", "gas turb(see notes)", "comb. turb-gas oper", "comb.turb.oil oper",
            "gas turbin (leasd)", "gas turbne/int comb", "gas turbine (note1)", "combution turbin",
            "* gas turbine", "add to gas turbine", "gas turbine (a)", "gas turbinint comb",
            "gas turbine (note 3)", "resp share gas note3", "gas trubine", "*gas turbine(note3)",
            "gas turbine note 3,6", "gas turbine note 4,6", "gas turbine peakload", "combusition turbine",
            "gas turbine (lease)", "comb. turb-gas oper.", "combution turbine", "combusion turbine",
            "comb. turb. oil oper", "combustion burbine", "combustion and gas", "comb. turb.",
            "gas turbine (lease", "gas turbine (leasd)", "gas turbine/int comb", "*gas turbine(note 3)",
            "gas turbine (see nos", "i.c.e./gas turbine", "gas turbine/intcomb", "cumbustion turbine",
            "gas turb, int. comb.", "gas turb, diesel", "gas turb, int. comb", "i.c.e/gas turbine",
            "diesel turbine", "comubstion turbine", "i.c.e. /gas turbine", "i.c.e/ gas turbine",
            "i.c.e./gas tubine",
        ],
    ),
    (
        "combined_cycle",
        &[
            "combined cycle", "combined cycle", "combined", "gas & steam turbine", "gas turb. & heat rec",
            "combined cycle", "com. cyc", "com. cycle", "gas turb-combined cy", "combined cycle ctg",
            "combined cycle - 40%", "com cycle gas turb", "combined cycle oper", "gas turb/comb. cyc",
            "combine cycle", "cc", "comb. cycle", "gas turb-combined cy", "steam and cc",
            "steam cc", "gas steam", "ctg steam gas", "steam comb cycle", "gas/steam comb. cycl",
            "steam (comb. cycle)", "gas turbine/steam", "steam & gas turbine", "gas trb & heat rec",
            "steam & combined ce", "st/gas turb comb cyc", "gas tur & comb cycl", "combined cycle (a,b)",
            "gas turbine/ steam", "steam/gas turb.", "steam & comb cycle", "gas/steam comb cycle",
            "comb cycle (a,b)", "igcc", "steam/gas turbine", "gas turbine / steam", "gas tur & comb cyl",
            "com cyc (see note)", "comb cycle", "gas turb-comb cycle", "combined turbine",
            "combined cyc", "combined cycle (2)", "combined cycle (3)", "ct/cc",
        ],
    ),
    (
        "nuclear",
        &[
            "nuclear", "nuclear (3)", "steam(nuclear)", "nuclear(see note4)", "nuclear steam",
            "nuclear turbine", "nuclear - steam", "nuclear (a)(b)(c)", "nuclear (b)(c)",
            "* nuclear", "nuclear (b) (c)", "nuclear (see notes)", "steam (nuclear)",
            "* nuclear (note 2)", "nuclear (note 2)", "nuclear (see note 2)", "nuclear(see note4)",
            "nuclear steam", "nuclear(see notes)", "nuclear-steam", "nuclear (see note 3)",
        ],
    ),
    ("geothermal", &["steam - geothermal", "steam_geothermal", "geothermal"]),
    (
        "internal_combustion",
        &[
            "ic", "internal combustion", "internal comb.", "internl combustion", "diesel turbine",
            "int combust (note 1)", "int. combust (note1)", "int.combustine", "comb. cyc",
            "internal comb", "diesel", "diesel engine", "internal combustion", "int combust - note 1",
            "int. combust - note1", "internal comb recip", "reciprocating engine", "comb. turbine",
            "internal combust.", "int. combustion (1)", "*int combustion (1)", "*internal combust'n",
            "internal", "internal comb.", "steam internal comb", "combustion", "int. combustion",
            "int combust (note1)", "int. combustine", "internl combustion", "*int. combustion (1)",
        ],
    ),
    ("wind", &["wind", "wind energy", "wind turbine", "wind - turbine", "wind generation"]),
    ("photovoltaic", &["solar photovoltaic", "photovoltaic", "solar", "solar project"]),
    ("solar_thermal", &["solar thermal"]),
];

pub const PRIME_MOVERS: &[&str] = &[
    "steam_turbine",
    "gas_turbine",
    "hydro",
    "internal_combustion",
    "solar_pv",
    "wind_turbine",
];

pub const RTO_ISO: &[(&str, &str)] = &[
    ("CAISO", "California ISO"),
    ("ERCOT", "Electric Reliability Council of Texas"),
    ("MISO", "Midcontinent ISO"),
    ("ISO-NE", "ISO New England"),
    ("NYISO", "New York ISO"),
    ("PJM", "PJM Interconnection"),
    ("SPP", "Southwest Power Pool"),
];

pub const CENSUS_REGIONS: &[(&str, &str)] = &[
    ("NEW", "New England"),
    ("MAT", "Middle Atlantic"),
    ("SAT", "South Atlantic"),
    ("ESC", "East South Central"),
    ("WSC", "West South Central"),
    ("ENC", "East North Central"),
    ("WNC", "West North Central"),
    ("MTN", "Mountain"),
    ("PACC", "Pacific Contiguous (OR, WA, CA)"),
    ("PACN", "Pacific Non-Contiguous (AK, HI)"),
];

pub const NERC_REGIONS: &[(&str, &str)] = &[
    ("NPCC", "Northeast Power Coordinating Council"),
    ("MRO", "Midwest Reliability Organization"),
    ("SERC", "SERC Reliability Corporation"),
    ("RFC", "Reliability First Corporation"),
    ("SPP", "Southwest Power Pool"),
    ("TRE", "Texas Regional Entity"),
    ("FRCC", "Florida Reliability Coordinating Council"),
    ("WECC", "Western Electricity Coordinating Council"),
];

pub const US_STATES: &[(&str, &str)] = &[
    ("AK", "Alaska"),
    ("AL", "Alabama"),
    ("AR", "Arkansas"),
    ("AS", "American Samoa"),
    ("AZ", "Arizona"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DC", "District of Columbia"),
    ("DE", "Delaware"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("GU", "Guam"),
    ("HI", "Hawaii"),
    ("IA", "Iowa"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("MA", "Massachusetts"),
    ("MD", "Maryland"),
    ("ME", "Maine"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MO", "Missouri"),
    ("MP", "Northern Mariana Islands"),
    ("MS", "Mississippi"),
    ("MT", "Montana"),
    ("NA", "National"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("NE", "Nebraska"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NV", "Nevada"),
    ("NY", "New York"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("PR", "Puerto Rico"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VA", "Virginia"),
    ("VI", "Virgin Islands"),
    ("VT", "Vermont"),
    ("WA", "Washington"),
    ("WI", "Wisconsin"),
    ("WV", "West Virginia"),
    ("WY", "Wyoming"),
];

pub const RESPONDENT_FREQUENCY_EIA923: &[(&str, &str)] = &[
    ("M", "Annual respondent, monthly data"),
    ("A", "Annual respondent, annual data"),
    ("AM", "Annual respondent, monthly imputed"),
];

pub const SECTOR_EIA: &[(i64, &str)] = &[
    (1, "Electric Utility"),
    (2, "NAICS-22 Non-Cogen"),
    (3, "NAICS-22 Cogen"),
    (4, "Commercial NAICS Non-Cogen"),
    (5, "Commercial NAICS Cogen"),
    (6, "Industrial NAICS Non-Cogen"),
    (7, "Industrial NAICS Cogen"),
];

pub const CONTRACT_TYPE_EIA923: &[(&str, &str)] = &[
    ("C", "Contract - Fuel received under a purchase order or contract with a term of one year or longer"),
    ("NC", "New Contract - Fuel received under a purchase order or contract with a term of one year or longer that was entered into during the reporting month"),
    ("S", "Spot Purchase - Fuel received under a purchase order or contract with a term of less than one year"),
    ("T", "Tolling Agreement - Fuel received under a tolling agreement"),
];

pub const FUEL_TYPE_EIA923: &[(&str, &str)] = &[
    ("AB", "Agricultural By-Products"),
    ("BFG", "Blast Furnace Gas"),
    ("BIT", "Bituminous Coal"),
    ("BLQ", "Black Liquor"),
    ("DFO", "Distillate Fuel Oil"),
    ("GEO", "Geothermal"),
    ("JF", "Jet Fuel"),
    ("KER", "Kerosene"),
    ("LFG", "Landfill Gas"),
    ("LIG", "Lignite Coal"),
    ("MSB", "Biogenic Municipal Solid Waste"),
    ("MSN", "Non-biogenic Municipal Solid Waste"),
    ("MSW", "Municipal Solid Waste"),
    ("MWH", "Electricity used for energy storage"),
    ("NG", "Natural Gas"),
    ("NUC", "Nuclear"),
    ("OBG", "Other Biomass Gas"),
    ("OBL", "Other Biomass Liquids"),
    ("OBS", "Other Biomass Solids"),
    ("OG", "Other Gas"),
    ("OTH", "Other Fuel"),
    ("PC", "Petroleum Coke"),
    ("PG", "Gaseous Propane"),
    ("PUR", "Purchased Steam"),
    ("RC", "Refined Coal"),
    ("RFO", "Residual Fuel Oil"),
    ("SC", "Coal-based Synfuel"),
    ("SGC", "Coal-Derived Synthesis Gas"),
    ("SGP", "Synthesis Gas from Petroleum Coke"),
    ("SLW", "Sludge Waste"),
    ("SUB", "Subbituminous Coal"),
    ("SUN", "Solar"),
    ("TDF", "Tire-derived Fuels"),
    ("WAT", "Water at a Conventional Hydroelectric Turbine"),
    ("WC", "Waste/Other Coal"),
    ("WDL", "Wood Waste Liquids"),
    ("WDS", "Wood/Wood Waste Solids"),
    ("WH", "Waste Heat"),
    ("WND", "Wind"),
    ("WO", "Waste/Other Oil"),
];

pub const PRIME_MOVERS_EIA923: &[(&str, &str)] = &[
    ("BA", "Energy Storage, Battery"),
    ("BT", "Turbines Used in a Binary Cycle"),
    ("CA", "Combined-Cycle -- Steam Part"),
    ("CC", "Combined-Cycle, Total Unit"),
    ("CE", "Energy Storage, Compressed Air"),
    ("CP", "Energy Storage, Concentrated Solar Power"),
    ("CS", "Combined-Cycle Single-Shaft"),
    ("CT", "Combined-Cycle Combustion Turbine Part"),
    ("ES", "Energy Storage, Other"),
    ("FC", "Fuel Cell"),
    ("FW", "Energy Storage, Flywheel"),
    ("GT", "Combustion (Gas) Turbine"),
    ("HA", "Hydrokinetic, Axial Flow Turbine"),
    ("HB", "Hydrokinetic, Wave Buoy"),
    ("HK", "Hydrokinetic, Other"),
    ("HY", "Hydraulic Turbine"),
    ("IC", "Internal Combustion (diesel, piston, reciprocating) Engine"),
    ("OT", "Other"),
    ("PS", "Energy Storage, Reversible Hydraulic Turbine (Pumped Storage)"),
    ("PV", "Solar Photovoltaic"),
    ("ST", "Steam Turbine"),
    ("WS", "Wind Turbine, Offshore"),
    ("WT", "Wind Turbine, Onshore"),
];

pub const FUEL_UNITS_EIA923: &[(&str, &str)] = &[
    ("MCF", "Thousands of cubic feet"),
    ("TON", "Short tons"),
    ("BBL", "Barrels"),
    ("MWH", "Megawatt hours"),
    ("MMBTU", "Millions of British thermal units"),
];

pub const FUEL_TYPE_AER_EIA923: &[(&str, &str)] = &[
    ("SUN", "Solar PV and thermal"),
    ("COL", "Coal"),
    ("DFO", "Distillate Petroleum"),
    ("GEO", "Geothermal"),
    ("HPS", "Hydroelectric Pumped Storage"),
    ("HYC", "Hydroelectric Conventional"),
    ("MLG", "Biogenic Municipal Solid Waste and Landfill Gas"),
    ("NG", "Natural Gas"),
    ("NUC", "Nuclear"),
    ("OOG", "Other Gases"),
    ("ORW", "Other Renewables"),
    ("OTH", "Other (including nonbiogenic MSW)"),
    ("PC", "Petroleum Coke"),
    ("RFO", "Residual Petroleum"),
    ("WND", "Wind"),
    ("WOC", "Waste Coal"),
    ("WOO", "Waste Oil"),
    ("WWW", "Wood and Wood Waste"),
];

pub const ENERGY_SOURCE_EIA923: &[(&str, &str)] = &[
    ("BIT", "Bituminous Coal"),
    ("DFO", "Distillate Fuel Oil"),
    ("JF", "Jet Fuel"),
    ("KER", "Kerosene"),
    ("LIG", "Lignite Coal"),
    ("NG", "Natural Gas"),
    ("PC", "Petroleum Coke"),
    ("PG", "Gaseous Propane"),
    ("OG", "Other Gas"),
    ("RC", "Refined Coal"),
    ("RFO", "Residual Fuel Oil"),
    ("SG", "Synthesis Gas"),
    ("SGP", "Synthesis Gas from Petroleum Coke"),
    ("SC", "Coal-based Synfuel"),
    ("SUB", "Subbituminous Coal"),
    ("WC", "Waste/Other Coal"),
    ("WO", "Waste/Other Oil"),
];

pub const FUEL_GROUP_EIA923: &[&str] = &[
    "Coal",
    "Natural Gas",
    "Petroleum",
    "Petroleum Coke",
    "Other Gas",
];

pub const COALMINE_TYPE_EIA923: &[(&str, &str)] = &[
    ("P", "Preparation Plant"),
    ("S", "Surface"),
    ("U", "Underground"),
    ("US", "Both an underground and surface mine with most coal extracted from underground"),
    ("SU", "Both an underground and surface mine with most coal extracted from surface"),
];

/// Foreign origins of coal deliveries; domestic mines are keyed by US state.
pub const COALMINE_COUNTRY_EIA923: &[(&str, &str)] = &[
    ("AU", "Australia"),
    ("CL", "Colombia"),
    ("CN", "Canada"),
    ("IS", "Indonesia"),
    ("PL", "Poland"),
    ("RS", "Russia"),
    ("UK", "United Kingdom"),
    ("VZ", "Venezuela"),
    ("OC", "Other Country"),
    ("IM", "Unknown"),
];

pub const TRANSPORT_MODES_EIA923: &[(&str, &str)] = &[
    ("RR", "Rail: Shipments of fuel moved to consumers by rail"),
    ("RV", "River: Shipments of fuel moved to consumers via river by barge"),
    ("GL", "Great Lakes: Shipments of coal moved to consumers via the Great Lakes"),
    ("TP", "Tidewater Piers and Coastal Ports"),
    ("WT", "Water: Shipments of fuel moved by water where the type of water is unknown"),
    ("TR", "Truck: Shipments of fuel moved to consumers by truck"),
    ("TC", "Tramway/Conveyor"),
    ("SP", "Slurry Pipeline"),
    ("PL", "Pipeline: Shipments of fuel moved by pipeline"),
];

pub const NATURAL_GAS_TRANSPORT_EIA923: &[(&str, &str)] = &[
    ("F", "Firm"),
    ("I", "Interruptible"),
];

/// `(row_number, account id, description)` of FERC 1 page 204, electric plant in
/// service.
pub const FERC_ELECTRIC_PLANT_ACCOUNTS: &[(i64, &str, &str)] = &[
    (2, "301", "Intangible Plant: Organization"),
    (3, "302", "Intangible Plant: Franchises and Consents"),
    (4, "303", "Intangible Plant: Miscellaneous Intangible Plant"),
    (5, "subtotal_intangible", "Subtotal Intangible Plant"),
    (8, "310", "Steam Production: Land and Land Rights"),
    (9, "311", "Steam Production: Structures and Improvements"),
    (10, "312", "Steam Production: Boiler Plant Equipment"),
    (11, "313", "Steam Production: Engines and Engine-Driven Generators"),
    (12, "314", "Steam Production: Turbogenerator Units"),
    (13, "315", "Steam Production: Accessory Electric Equipment"),
    (14, "316", "Steam Production: Miscellaneous Power Plant Equipment"),
    (15, "317", "Steam Production: Asset Retirement Costs for Steam Production Plant"),
    (16, "subtotal_steam_production", "Subtotal Steam Production Plant"),
    (18, "320", "Nuclear Production: Land and Land Rights (Major Only)"),
    (19, "321", "Nuclear Production: Structures and Improvements (Major Only)"),
    (20, "322", "Nuclear Production: Reactor Plant Equipment (Major Only)"),
    (21, "323", "Nuclear Production: Turbogenerator Units (Major Only)"),
    (22, "324", "Nuclear Production: Accessory Electric Equipment (Major Only)"),
    (23, "325", "Nuclear Production: Miscellaneous Power Plant Equipment (Major Only)"),
    (24, "326", "Nuclear Production: Asset Retirement Costs for Nuclear Production Plant (Major Only)"),
    (25, "subtotal_nuclear_produciton", "Subtotal Nuclear Production Plant"),
    (27, "330", "Hydraulic Production: Land and Land Rights"),
    (28, "331", "Hydraulic Production: Structures and Improvements"),
    (29, "332", "Hydraulic Production: Reservoirs, Dams, and Waterways"),
    (30, "333", "Hydraulic Production: Water Wheels, Turbines and Generators"),
    (31, "334", "Hydraulic Production: Accessory Electric Equipment"),
    (32, "335", "Hydraulic Production: Miscellaneous Power Plant Equipment"),
    (33, "336", "Hydraulic Production: Roads, Railroads and Bridges"),
    (34, "337", "Hydraulic Production: Asset Retirement Costs for Hydraulic Production Plant"),
    (35, "subtotal_hydraulic_production", "Subtotal Hydraulic Production Plant"),
    (37, "340", "Other Production: Land and Land Rights"),
    (38, "341", "Other Production: Structures and Improvements"),
    (39, "342", "Other Production: Fuel Holders, Products, and Accessories"),
    (40, "343", "Other Production: Prime Movers"),
    (41, "344", "Other Production: Generators"),
    (42, "345", "Other Production: Accessory Electric Equipment"),
    (43, "346", "Other Production: Miscellaneous Power Plant Equipment"),
    (44, "347", "Other Production: Asset Retirement Costs for Other Production Plant"),
    (45, "subtotal_other_production", "Subtotal Other Production Plant"),
    (46, "subtotal_production", "Subtotal Production Plant"),
    (48, "350", "Transmission: Land and Land Rights"),
    (49, "352", "Transmission: Structures and Improvements"),
    (50, "353", "Transmission: Station Equipment"),
    (51, "354", "Transmission: Towers and Fixtures"),
    (52, "355", "Transmission: Poles and Fixtures"),
    (53, "356", "Transmission: Overhead Conductors and Devices"),
    (54, "357", "Transmission: Underground Conduit"),
    (55, "358", "Transmission: Underground Conductors and Devices"),
    (56, "359", "Transmission: Roads and Trails"),
    (57, "359.1", "Transmission: Asset Retirement Costs for Transmission Plant"),
    (58, "subtotal_transmission", "Subtotal Transmission Plant"),
    (60, "360", "Distribution: Land and Land Rights"),
    (61, "361", "Distribution: Structures and Improvements"),
    (62, "362", "Distribution: Station Equipment"),
    (63, "363", "Distribution: Storage Battery Equipment"),
    (64, "364", "Distribution: Poles, Towers, and Fixtures"),
    (65, "365", "Distribution: Overhead Conductors and Devices"),
    (66, "366", "Distribution: Underground Conduit"),
    (67, "367", "Distribution: Underground Conductors and Devices"),
    (68, "368", "Distribution: Line Transformers"),
    (69, "369", "Distribution: Services"),
    (70, "370", "Distribution: Meters"),
    (71, "371", "Distribution: Installations on Customer Premises"),
    (72, "372", "Distribution: Leased Property on Customer Premises"),
    (73, "373", "Distribution: Street Lighting and Signal Systems"),
    (74, "374", "Distribution: Asset Retirement Costs for Distribution Plant"),
    (75, "subtotal_distribution", "Subtotal Distribution Plant"),
    (77, "380", "Regional Transmission and Market Operation: Land and Land Rights"),
    (78, "381", "Regional Transmission and Market Operation: Structures and Improvements"),
    (79, "382", "Regional Transmission and Market Operation: Computer Hardware"),
    (80, "383", "Regional Transmission and Market Operation: Computer Software"),
    (81, "384", "Regional Transmission and Market Operation: Communication Equipment"),
    (82, "385", "Regional Transmission and Market Operation: Miscellaneous Regional Transmission and Market Operation Plant"),
    (83, "386", "Regional Transmission and Market Operation: Asset Retirement Costs for Regional Transmission and Market Operation Plant"),
    (84, "subtotal_regional_transmission_and_market_operation", "Subtotal Regional Transmission and Market Operation Plant"),
    (86, "389", "General: Land and Land Rights"),
    (87, "390", "General: Structures and Improvements"),
    (88, "391", "General: Office Furniture and Equipment"),
    (89, "392", "General: Transportation Equipment"),
    (90, "393", "General: Stores Equipment"),
    (91, "394", "General: Tools, Shop and Garage Equipment"),
    (92, "395", "General: Laboratory Equipment"),
    (93, "396", "General: Power Operated Equipment"),
    (94, "397", "General: Communication Equipment"),
    (95, "398", "General: Miscellaneous Equipment"),
    (96, "subtotal_general", "Subtotal General Plant"),
    (97, "399", "General: Other Tangible Property"),
    (98, "399.1", "General: Asset Retirement Costs for General Plant"),
    (99, "total_general", "Total General Plant"),
    (100, "101_and_106", "Electric plant in service (Major only)"),
    (101, "102_purchased", "Electric Plant Purchased"),
    (102, "102_sold", "Electric Plant Sold"),
    (103, "103", "Experimental Plant Unclassified"),
    (104, "total_electric_plant", "Total Electric Plant in Service"),
];

/// `(row_number, line id, description)` of FERC 1 page 219, accumulated provision
/// for depreciation of electric utility plant.
pub const FERC_ACCUMULATED_DEPRECIATION: &[(i64, &str, &str)] = &[
    (1, "balance_beginning_of_year", "Balance Beginning of Year"),
    (3, "depreciation_expense", "(403) Depreciation Expense"),
    (4, "depreciation_expense_asset_retirement", "(403.1) Depreciation Expense for Asset Retirement Costs"),
    (5, "expense_electric_plant_leased_to_others", "(413) Exp. of Elec. Plt. Leas. to Others"),
    (6, "transportation_expenses_clearing", "Transportation Expenses-Clearing"),
    (7, "other_clearing_accounts", "Other Clearing Accounts"),
    (8, "other_accounts_specified", "Other Accounts (Specify, details in footnote):"),
    (9, "book_cost_retired_plant", "Book Cost of Plant Retired"),
    (10, "depreciation_provision", "TOTAL Deprec. Prov for Year (Enter Total of lines 3 thru 9)"),
    (12, "book_cost_retired_plant_2", "Book Cost or Retired Plant"),
    (13, "cost_of_removal", "Cost of Removal"),
    (14, "salvage_credit", "Salvage (Credit)"),
    (15, "total_net_charges_for_plant_retired", "TOTAL Net Chrgs. for Plant Ret. (Enter Total of lines 12 thru 14)"),
    (16, "other_debit_or_credit_items", "Other Debit or Cr. Items (Describe, details in footnote):"),
    (18, "book_cost_asset_retirement_costs_retired", "Book Cost of Asset Retirement Costs"),
    (19, "balance_end_of_year", "Balance End of Year (Enter Totals of lines 1, 10, 15, 16, and 18)"),
    (20, "steam_production", "Steam Production"),
    (21, "nuclear_production", "Nuclear Production"),
    (22, "hydraulic_production_conventional", "Hydraulic Production-Conventional"),
    (23, "hydraulic_production_pumped_storage", "Hydraulic Production-Pumped Storage"),
    (24, "other_production", "Other Production"),
    (25, "transmission", "Transmission"),
    (26, "distribution", "Distribution"),
    (27, "regional_transmission_and_market_operation", "Regional Transmission and Market Operation"),
    (28, "general", "General"),
    (29, "total", "TOTAL (Enter Total of lines 20 thru 28)"),
];

/// FERC 1 tables with a working transform, in load order.
pub const FERC1_WORKING_TABLES: &[&str] = &[
    "f1_fuel",
    "f1_steam",
    "f1_gnrt_plant",
    "f1_hydro",
    "f1_pumped_storage",
    "f1_plant_in_srvce",
    "f1_purchased_pwr",
    "f1_accumdepr_prvsn",
];

/// FERC 1 tables that feed PUDL: the working tables plus the respondent list the
/// audit reads.
pub const FERC1_PUDL_TABLES: &[&str] = &[
    "f1_respondent_id",
    "f1_fuel",
    "f1_steam",
    "f1_gnrt_plant",
    "f1_hydro",
    "f1_pumped_storage",
    "f1_plant_in_srvce",
    "f1_purchased_pwr",
    "f1_accumdepr_prvsn",
];

/// EIA 923 load targets, in load order.
pub const EIA923_PUDL_TABLES: &[&str] = &[
    "plant_info_eia923",
    "generation_fuel_eia923",
    "boiler_fuel_eia923",
    "generation_eia923",
    "fuel_receipts_costs_eia923",
    "stocks_eia923",
];

/// Spreadsheet pages of EIA 923 that the loader reads.
pub const EIA923_PAGES: &[&str] = &[
    "generation_fuel",
    "stocks",
    "boiler_fuel",
    "generator",
    "fuel_receipts_costs",
    "plant_frame",
];

pub const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];
