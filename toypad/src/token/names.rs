// toypad/src/token/names.rs

//! Display-name tables for known minifigure and vehicle ids.

const MINIFIGURES: &[(u32, &str)] = &[
    (1, "Batman"),
    (2, "Gandalf"),
    (3, "Wyldstyle"),
    (4, "Aquaman"),
    (5, "Bad Cop"),
    (6, "Bane"),
    (7, "Bart Simpson"),
    (8, "Benny"),
    (9, "Chell"),
    (10, "Cole"),
    (11, "Cragger"),
    (12, "Cyborg"),
    (13, "Cyberman"),
    (14, "Doc Brown"),
    (15, "The Doctor"),
    (16, "Emmet"),
    (17, "Eris"),
    (18, "Gimli"),
    (19, "Gollum"),
    (20, "Harley Quinn"),
    (21, "Homer Simpson"),
    (22, "Jay"),
    (23, "Joker"),
    (24, "Kai"),
    (25, "ACU Trooper"),
    (26, "Gamer Kid"),
    (27, "Krusty the Clown"),
    (28, "Laval"),
    (29, "Legolas"),
    (30, "Lloyd"),
    (31, "Marty McFly"),
    (32, "Nya"),
    (33, "Owen Grady"),
    (34, "Peter Venkman"),
    (35, "Slimer"),
    (36, "Scooby-Doo"),
    (37, "Sensei Wu"),
    (38, "Shaggy"),
    (39, "Stay Puft"),
    (40, "Superman"),
    (41, "Unikitty"),
    (42, "Wicked Witch"),
    (43, "Wonder Woman"),
    (44, "Zane"),
    (45, "Green Arrow"),
    (46, "Supergirl"),
    (47, "Abby Yates"),
    (48, "Finn the Human"),
    (49, "Ethan Hunt"),
    (50, "Lumpy Space Princess"),
    (51, "Jake the Dog"),
    (52, "Harry Potter"),
    (53, "Lord Voldemort"),
    (54, "Michael Knight"),
    (55, "B.A. Baracus"),
    (56, "Newt Scamander"),
    (57, "Sonic the Hedgehog"),
    (59, "Gizmo"),
    (60, "Stripe"),
    (61, "E.T."),
    (62, "Tina Goldstein"),
    (63, "Marceline"),
    (64, "Batgirl"),
    (65, "Robin"),
    (66, "Sloth"),
    (67, "Hermione Granger"),
    (68, "Chase McCain"),
    (69, "Excalibur Batman"),
    (70, "Raven"),
    (71, "Beast Boy"),
    (72, "Betelgeuse"),
    (73, "Lord Vortech"),
    (74, "Blossom"),
    (75, "Bubbles"),
    (76, "Buttercup"),
    (77, "Starfire"),
];

const VEHICLES: &[(u32, &str)] = &[
    (1000, "Police Car"),
    (1001, "Aerial Squad Car"),
    (1002, "Missile Striker"),
    (1003, "Gravity Sprinter"),
    (1004, "Street Shredder"),
    (1005, "Sky Clobberer"),
    (1006, "Batmobile"),
    (1007, "Batblaster"),
    (1008, "Sonic Batray"),
    (1009, "Benny's Spaceship"),
    (1010, "Lasercraft"),
    (1011, "The Annihilator"),
    (1012, "DeLorean Time Machine"),
    (1013, "Electric Time Machine"),
    (1014, "Ultra Time Machine"),
    (1015, "Hoverboard"),
    (1016, "Cyclone Board"),
    (1017, "Ultimate Hoverjet"),
    (1018, "Eagle Interceptor"),
    (1019, "Eagle Sky Blazer"),
    (1020, "Eagle Swoop Diver"),
    (1021, "Swamp Skimmer"),
    (1022, "Cragger's Fireship"),
    (1023, "Croc Command Sub"),
    (1024, "Cyber-Guard"),
    (1025, "Cyber-Wrecker"),
    (1026, "Laser Robot Walker"),
    (1027, "K-9"),
    (1028, "K-9 Ruff Rover"),
    (1029, "K-9 Laser Cutter"),
    (1030, "TARDIS"),
    (1031, "Laser-Pulse TARDIS"),
    (1032, "Energy-Burst TARDIS"),
    (1033, "Emmet's Excavator"),
    (1034, "The Destroydozer"),
    (1035, "Destruct-o-Mech"),
    (1036, "Winged Monkey"),
    (1037, "Battle Monkey"),
    (1038, "Commander Monkey"),
];

fn lookup(table: &'static [(u32, &'static str)], id: u32) -> Option<&'static str> {
    table
        .binary_search_by_key(&id, |&(k, _)| k)
        .ok()
        .map(|i| table[i].1)
}

pub fn minifigure_name(id: u32) -> Option<&'static str> {
    lookup(MINIFIGURES, id)
}

pub fn vehicle_name(id: u32) -> Option<&'static str> {
    lookup(VEHICLES, id)
}

/// Name shown for ids missing from the tables
pub fn placeholder_name(id: u32) -> String {
    format!("Unknown ({})", id)
}

/// All known minifigures, for selection menus.
pub fn minifigures() -> impl Iterator<Item = (u32, &'static str)> {
    MINIFIGURES.iter().copied()
}

pub fn vehicles() -> impl Iterator<Item = (u32, &'static str)> {
    VEHICLES.iter().copied()
}
