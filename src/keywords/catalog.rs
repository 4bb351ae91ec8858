// src/keywords/catalog.rs
//! Built-in word lists for keyword generation and the hardcoded seed keywords.

use crate::models::KeywordCategory;

pub const SERVICES: [&str; 97] = [
    "hair salon", "barber", "nail salon", "spa", "beauty salon", "makeup artist", "braiding",
    "box braids", "knotless braids", "cornrows", "twists", "dreadlocks", "hair extensions",
    "weave installation", "haircut", "men's haircut", "fade haircut", "kids haircut",
    "hair styling", "blowout", "hair colour", "highlights", "Brazilian blowout",
    "Olaplex treatment", "manicure", "pedicure", "gel nails", "acrylic nails", "nail art",
    "lash extensions", "lash lift", "microblading", "brow lamination", "threading", "facial",
    "skin care", "chemical peel", "massage", "deep tissue massage", "Swedish massage",
    "couples massage", "hot stone massage", "waxing", "Brazilian wax", "Hollywood wax",
    "leg wax", "men's grooming", "hot shave", "beard trim", "wedding makeup", "tattoo removal",
    "balayage", "ombre", "hair color", "hair dye", "keratin treatment", "hair treatment",
    "hair transformation", "haircut and color", "haircut and style", "Ghana braids",
    "Senegalese twists", "crochet braids", "faux locs", "nail technician", "nail care",
    "nail design", "nail polish", "nail repair", "eyebrow threading", "eyebrow waxing",
    "eyebrow tinting", "eyebrow shaping", "full body massage", "sports massage",
    "prenatal massage", "reflexology", "body scrub", "body wrap", "cellulite treatment",
    "anti-aging facial", "acne treatment", "skin rejuvenation", "dermaplaning", "hydrafacial",
    "bikini wax", "underarm wax", "full leg wax", "half leg wax", "bridal hair",
    "bridal makeup", "bridal package", "wedding hair and makeup", "event makeup",
    "special occasion makeup", "prom makeup", "matric dance makeup",
];

/// Cities and suburbs grouped by province, Gauteng first.
/// Shapes that take a location slice read from the front of this list.
pub const LOCATIONS: [&str; 365] = [
    "Johannesburg", "Sandton", "Pretoria", "Randburg", "Soweto", "Midrand", "Roodepoort",
    "Rosebank", "Fourways", "Bedfordview", "Centurion", "Kempton Park", "Springs", "Germiston",
    "Benoni", "Boksburg", "Alberton", "Edenvale", "Vanderbijlpark", "Vereeniging",
    "Krugersdorp", "Alexandra", "Katlehong", "Tembisa", "Vosloorus", "Mamelodi", "Soshanguve",
    "Atteridgeville", "Melrose", "Hyde Park", "Bryanston", "Parktown", "Melville", "Greenside",
    "Illovo", "Houghton", "Killarney", "Norwood", "Orange Grove", "Auckland Park",
    "Braamfontein", "Newtown", "Maboneng", "Fordsburg", "Cape Town", "Camps Bay", "Clifton",
    "Green Point", "Mouille Point", "V&A Waterfront", "City Bowl", "Gardens", "Tamboerskloof",
    "Oranjezicht", "Vredehoek", "Constantia", "Newlands", "Rondebosch", "Observatory",
    "Mowbray", "Pinelands", "Parow", "Goodwood", "Brackenfell", "Kraaifontein",
    "Somerset West", "Strand", "Gordon's Bay", "Hermanus", "Knysna", "Plettenberg Bay",
    "George", "Mossel Bay", "Oudtshoorn", "Worcester", "Robertson", "Franschhoek",
    "Wellington", "Tulbagh", "Ceres", "Langebaan", "Saldanha", "Vredenburg", "Atlantis",
    "Milnerton", "Table View", "Blouberg", "Melkbosstrand", "Hout Bay", "Noordhoek",
    "Fish Hoek", "Simon's Town", "Kalk Bay", "Muizenberg", "St James", "Kommetjie",
    "Scarborough", "Sunset Beach", "Big Bay", "Stellenbosch", "Paarl", "Durbanville",
    "Bellville", "Claremont", "Sea Point", "Durban", "Durban North", "Westville", "Ballito",
    "Hillcrest", "Kloof", "Pinetown", "New Germany", "Queensburgh", "Amanzimtoti", "Umlazi",
    "Chatsworth", "Phoenix", "Verulam", "Tongaat", "Umhlanga Rocks", "La Mercy", "Umdloti",
    "Salt Rock", "Shakaskraal", "Zimbali", "Pietermaritzburg", "Hilton", "Howick", "Richmond",
    "Greytown", "Scottburgh", "Port Shepstone", "Margate", "Ramsgate", "Southbroom",
    "Shelly Beach", "Uvongo", "Port Edward", "Kokstad", "Harding", "Underberg", "Himeville",
    "Nottingham Road", "Mooi River", "Estcourt", "Ladysmith", "Newcastle", "Vryheid", "Dundee",
    "Glencoe", "Port Elizabeth", "Gqeberha", "Summerstrand", "Humewood", "Richmond Hill",
    "Central", "Greenacres", "Newton Park", "Lorraine", "Walmer", "Schoenmakerskop",
    "Sardinia Bay", "Jeffreys Bay", "St Francis Bay", "Cape St Francis", "Port Alfred",
    "Kentucky-on-Sea", "Bathurst", "Grahamstown", "Makhanda", "Adelaide", "Fort Beaufort",
    "Cradock", "Graaff-Reinet", "Aberdeen", "Somerset East", "Jansenville", "Steytlerville",
    "Willowmore", "Uniondale", "Kareedouw", "Joubertina", "Patensie", "Hankey", "Paterson",
    "Kirkwood", "Addo", "Alexandria", "Bushmans River Mouth", "Cannon Rocks", "East London",
    "Bloemfontein", "Welkom", "Kroonstad", "Sasolburg", "Virginia", "Odendaalsrus",
    "Bothaville", "Parys", "Vredefort", "Koppies", "Heilbron", "Villiers", "Frankfort",
    "Reitz", "Lindley", "Bethlehem", "Clarens", "Fouriesburg", "Harrismith", "Phuthaditjhaba",
    "Ladybrand", "Ficksburg", "Clocolan", "Marquard", "Senekal", "Winburg", "Brandfort",
    "Theunissen", "Bultfontein", "Hoofstad", "Nelspruit", "Mbombela", "White River",
    "Hazyview", "Sabie", "Graskop", "Pilgrim's Rest", "Lydenburg", "Machadodorp", "Dullstroom",
    "Barberton", "Badplaas", "Carolina", "Ermelo", "Bethal", "Standerton", "Secunda",
    "Trichardt", "Evander", "Kinross", "Middelburg", "Witbank", "Emalahleni", "Kriel", "Ogies",
    "Delmas", "Bronkhorstspruit", "Belfast", "Waterval Boven", "Kaapmuiden", "Polokwane",
    "Pietersburg", "Seshego", "Mankweng", "Turfloop", "Tzaneen", "Haenertsburg",
    "Magoebaskloof", "Duiwelskloof", "Modjadjiskloof", "Phalaborwa", "Hoedspruit", "Timbavati",
    "Klaserie", "Orpen", "Louis Trichardt", "Makhado", "Musina", "Messina", "Alldays",
    "Ellisras", "Lephalale", "Mokopane", "Potgietersrus", "Modimolle", "Nylstroom",
    "Bela-Bela", "Warmbaths", "Thabazimbi", "Northam", "Giyani", "Groblersdal", "Marble Hall",
    "Roedtan", "Naboomspruit", "Rustenburg", "Sun City", "Pilanesberg", "Klerksdorp",
    "Potchefstroom", "Ventersdorp", "Lichtenburg", "Coligny", "Delareyville", "Sannieshof",
    "Ottosdal", "Schweizer-Reneke", "Wolmaransstad", "Makwassie", "Leeudoringstad",
    "Stilfontein", "Orkney", "Hartbeesfontein", "Vryburg", "Mafikeng", "Mmabatho", "Mahikeng",
    "Zeerust", "Groot Marico", "Brits", "Hartbeespoort", "Broederstroom", "Kosmos", "Ifafi",
    "Hebron", "Kimberley", "Upington", "Kuruman", "Kathu", "Sishen", "Postmasburg",
    "Olifantshoek", "Danielskuil", "Barkly West", "Warrenton", "Hartswater", "Jan Kempdorp",
    "Vryburg", "Taung", "Campbell", "Griquatown", "Prieska", "Marydale", "Groblershoop",
    "Keimoes", "Kakamas", "Augrabies", "Kenhardt", "Brandvlei", "Calvinia", "Nieuwoudtville",
    "Loeriesfontein", "Williston", "Fraserburg", "Carnarvon", "Victoria West", "Hutchinson",
    "Richmond", "Hanover", "Colesberg", "Norvalspont", "De Aar", "Britstown", "Loxton",
    "Sutherland", "Merweville", "Beaufort West", "Laingsburg", "Prince Albert", "Leeu-Gamka",
    "Murraysburg", "Nelspoort", "Three Sisters",
];

pub const PREFIX_MODIFIERS: [&str; 23] = [
    "best", "top-rated", "affordable", "cheap", "find a", "book a", "mobile", "last-minute",
    "emergency", "walk-in", "luxury", "premium", "professional", "experienced", "certified",
    "licensed", "nearby", "local", "recommended", "popular", "trending", "new", "established",
];

pub const SUFFIX_MODIFIERS: [&str; 26] = [
    "near me", "prices", "cost", "specials", "deals", "reviews", "open now", "for men",
    "for women", "for kids", "quotes", "booking", "appointment", "online booking", "same day",
    "walk in", "discount", "promotion", "package", "treatment", "service", "salon", "studio",
    "clinic", "spa", "shop",
];

pub const COMPETITORS: [&str; 4] = ["Booksy", "Fresha", "Treatwell", "StyleSeat"];

/// Synonyms expanded per service for the curated subset.
pub const SERVICE_VARIATIONS: [(&str, &[&str]); 10] = [
    (
        "hair salon",
        &["hairdresser", "hairstylist", "hair studio", "hair salon near me"],
    ),
    (
        "nail salon",
        &["nail technician", "nail studio", "nail bar", "nail spa"],
    ),
    (
        "spa",
        &["day spa", "wellness center", "beauty spa", "relaxation spa"],
    ),
    (
        "barber",
        &["barbershop", "barber shop", "men's barber", "traditional barber"],
    ),
    (
        "massage",
        &["massage therapist", "massage therapy", "therapeutic massage"],
    ),
    (
        "makeup artist",
        &["makeup artist near me", "professional makeup", "bridal makeup artist"],
    ),
    (
        "braiding",
        &["hair braiding", "braiding salon", "braid specialist", "african hair braiding"],
    ),
    (
        "waxing",
        &["waxing salon", "wax specialist", "hair removal", "waxing studio"],
    ),
    (
        "facial",
        &["facial treatment", "facial spa", "skin facial", "deep cleansing facial"],
    ),
    (
        "manicure",
        &["manicure and pedicure", "nail manicure", "gel manicure", "classic manicure"],
    ),
];

/// Salon-specific keywords seeded into `seo_keywords` as `(keyword, category, priority)`.
pub const SEED_KEYWORDS: [(&str, KeywordCategory, i32); 115] = [
    ("French Curl Braids", KeywordCategory::Hair, 1),
    ("Boho Knotless Braids", KeywordCategory::Hair, 1),
    ("Boho Goddess Braids", KeywordCategory::Hair, 1),
    ("Coi Leray Braids", KeywordCategory::Hair, 1),
    ("Heart Braids", KeywordCategory::Hair, 1),
    ("Zig Zag Braids", KeywordCategory::Hair, 1),
    ("Pop Smoke Braids", KeywordCategory::Hair, 1),
    ("Alicia Keys Braids", KeywordCategory::Hair, 1),
    ("Lemonade Braids", KeywordCategory::Hair, 1),
    ("Cleopatra Braids", KeywordCategory::Hair, 1),
    ("Makhosi Braids", KeywordCategory::Hair, 1),
    ("Shell Braids", KeywordCategory::Hair, 1),
    ("Popcorn Braids", KeywordCategory::Hair, 1),
    ("Triangle Braids", KeywordCategory::Hair, 1),
    ("Knotted Braids", KeywordCategory::Hair, 1),
    ("Normal Braids", KeywordCategory::Hair, 1),
    ("Pompom Braids", KeywordCategory::Hair, 1),
    ("Gypsy Braids", KeywordCategory::Hair, 1),
    ("Butterfly Braids", KeywordCategory::Hair, 1),
    ("Butterfly Twists", KeywordCategory::Hair, 1),
    ("Distressed Locs", KeywordCategory::Hair, 1),
    ("Bongo Dreads", KeywordCategory::Hair, 1),
    ("Marley Locks", KeywordCategory::Hair, 1),
    ("Invisible Locs", KeywordCategory::Hair, 1),
    ("Curly Faux Locs", KeywordCategory::Hair, 1),
    ("Stitch Cornrows", KeywordCategory::Hair, 1),
    ("Sleek Cornrows", KeywordCategory::Hair, 1),
    ("Freestyle Cornrows", KeywordCategory::Hair, 1),
    ("Beaded Cornrows", KeywordCategory::Hair, 1),
    ("Straight Back Cornrows", KeywordCategory::Hair, 1),
    ("Freehand Cornrows", KeywordCategory::Hair, 1),
    ("Wig Lines", KeywordCategory::Hair, 1),
    ("Yarn Twists", KeywordCategory::Hair, 1),
    ("Micro Twists", KeywordCategory::Hair, 1),
    ("Invisible Twists", KeywordCategory::Hair, 1),
    ("Natural Twists", KeywordCategory::Hair, 1),
    ("Part Twists", KeywordCategory::Hair, 1),
    ("Sleek Ponytail", KeywordCategory::Hair, 1),
    ("Gypsy Ponytail", KeywordCategory::Hair, 1),
    ("Puff Ponytail", KeywordCategory::Hair, 1),
    ("Kinky Ponytail", KeywordCategory::Hair, 1),
    ("Jozi Ponytail", KeywordCategory::Hair, 1),
    ("Katy Perry Ponytail", KeywordCategory::Hair, 1),
    ("Dolamo Ponytail", KeywordCategory::Hair, 1),
    ("Croissant Ponytail", KeywordCategory::Hair, 1),
    ("Straight Up", KeywordCategory::Hair, 1),
    ("Sleek Straight Up", KeywordCategory::Hair, 1),
    ("Dark N Lovely Relaxer", KeywordCategory::Hair, 1),
    ("Mizani Relaxer", KeywordCategory::Hair, 1),
    ("ORS Relaxer", KeywordCategory::Hair, 1),
    ("S Curl", KeywordCategory::Hair, 1),
    ("Revlon Relaxer", KeywordCategory::Hair, 1),
    ("Touch Up Relaxer", KeywordCategory::Hair, 1),
    ("Naturalista", KeywordCategory::Hair, 1),
    ("Dry Perm", KeywordCategory::Hair, 1),
    ("Wig Installation", KeywordCategory::Hair, 1),
    ("Wig Making", KeywordCategory::Hair, 1),
    ("Wig Styling", KeywordCategory::Hair, 1),
    ("Sew In", KeywordCategory::Hair, 1),
    ("Weave Installation", KeywordCategory::Hair, 1),
    ("Closure Wig", KeywordCategory::Hair, 1),
    ("Frontal Wig", KeywordCategory::Hair, 1),
    ("Leave Out Weave", KeywordCategory::Hair, 1),
    ("Kinky Sew In", KeywordCategory::Hair, 1),
    ("Pixie Cut Extensions", KeywordCategory::Hair, 1),
    ("Natural Dreadlocks", KeywordCategory::Hair, 1),
    ("Loc Twist", KeywordCategory::Hair, 1),
    ("Dreadlock Wash", KeywordCategory::Hair, 1),
    ("Jozi Dreads", KeywordCategory::Hair, 1),
    ("Blow Wave", KeywordCategory::Hair, 1),
    ("Wash And Blow Dry", KeywordCategory::Hair, 1),
    ("Flat Iron", KeywordCategory::Hair, 1),
    ("Split Ends Trim", KeywordCategory::Hair, 1),
    ("Dry Curl", KeywordCategory::Hair, 1),
    ("Olaplex", KeywordCategory::Hair, 1),
    ("Deep Conditioner Mask", KeywordCategory::Hair, 1),
    ("Intensive Repair Treatment", KeywordCategory::Hair, 1),
    ("Hair Loss Treatment", KeywordCategory::Hair, 1),
    ("Closure Bleach", KeywordCategory::Hair, 1),
    ("Decolorizer", KeywordCategory::Hair, 1),
    ("Weave Dye", KeywordCategory::Hair, 1),
    ("Ombre Color", KeywordCategory::Hair, 1),
    ("Kids Cornrows", KeywordCategory::Hair, 1),
    ("Kids Freehand", KeywordCategory::Hair, 1),
    ("Kids Box Braids", KeywordCategory::Hair, 1),
    ("Kids Relaxer", KeywordCategory::Hair, 1),
    ("Kids Pick And Drop", KeywordCategory::Hair, 1),
    ("Kids Tribal Braids", KeywordCategory::Hair, 1),
    ("Kids Wash And Dry", KeywordCategory::Hair, 1),
    ("Kids Blow Wave", KeywordCategory::Hair, 1),
    ("Kiddies Hair", KeywordCategory::Hair, 1),
    ("Chiskop", KeywordCategory::MensGrooming, 1),
    ("Male Cornrows", KeywordCategory::MensGrooming, 1),
    ("Waves", KeywordCategory::MensGrooming, 1),
    ("Combination Brows", KeywordCategory::Brows, 1),
    ("Brow Tweeze", KeywordCategory::Brows, 1),
    ("Microshading", KeywordCategory::Brows, 1),
    ("Cluster Lashes", KeywordCategory::Lashes, 1),
    ("Classic Cluster", KeywordCategory::Lashes, 1),
    ("Semi Hybrid Lashes", KeywordCategory::Lashes, 1),
    ("Lash Refill", KeywordCategory::Lashes, 1),
    ("Nail Tips", KeywordCategory::Nails, 1),
    ("Nail Deco", KeywordCategory::Nails, 1),
    ("Soak Off", KeywordCategory::Nails, 1),
    ("Plain Nails", KeywordCategory::Nails, 1),
    ("Acrylic Pedicure", KeywordCategory::Nails, 1),
    ("Gel Pedicure", KeywordCategory::Nails, 1),
    ("Unbraiding", KeywordCategory::Hair, 2),
    ("Hair Piece Mixing", KeywordCategory::Hair, 2),
    ("Extra Parting", KeywordCategory::Hair, 2),
    ("House Call", KeywordCategory::General, 1),
    ("Mobile Service", KeywordCategory::General, 1),
    ("Hair Beads", KeywordCategory::Hair, 2),
    ("Dermaplaning Facial", KeywordCategory::Spa, 1),
    ("Face And Neck Treatment", KeywordCategory::Spa, 1),
];
