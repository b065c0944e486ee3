//! Base type names per equipment class
//!
//! Sourced from the game's base item data. Only classes that can take part
//! in a vendor recipe are listed.

use super::ItemClass;

pub(super) static BASE_TYPES: &[(ItemClass, &[&str])] = &[
    (ItemClass::Amulet, &[
        "Agate Amulet", "Amber Amulet", "Blue Pearl Amulet", "Citrine Amulet",
        "Coral Amulet", "Gold Amulet", "Jade Amulet", "Lapis Amulet",
        "Marble Amulet", "Onyx Amulet", "Paua Amulet", "Seaglass Amulet",
        "Simplex Amulet", "Turquoise Amulet",
    ]),
    (ItemClass::Belt, &[
        "Chain Belt", "Cloth Belt", "Crystal Belt", "Heavy Belt",
        "Leather Belt", "Rustic Sash", "Studded Belt", "Stygian Vise",
        "Vanguard Belt",
    ]),
    (ItemClass::Boots, &[
        "Ambush Boots", "Antique Greaves", "Assassin's Boots", "Bronzescale Boots",
        "Carnal Boots", "Chain Boots", "Clasped Boots", "Conjurer Boots",
        "Crusader Boots", "Deerskin Boots", "Dragonscale Boots", "Eelskin Boots",
        "Goathide Boots", "Golden Caligae", "Iron Greaves", "Leatherscale Boots",
        "Mesh Boots", "Murder Boots", "Nubuck Boots", "Plated Greaves",
        "Riveted Boots", "Samite Slippers", "Satin Slippers", "Shackled Boots",
        "Shagreen Boots", "Sharkskin Boots", "Silk Slippers", "Slink Boots",
        "Soldier Boots", "Sorcerer Boots", "Stealth Boots", "Steel Greaves",
        "Titan Greaves", "Two-Toned Boots", "Vaal Greaves", "Wool Shoes",
        "Wrapped Boots", "Zealot Boots",
    ]),
    (ItemClass::Bow, &[
        "Assassin Bow", "Bone Bow", "Citadel Bow", "Composite Bow",
        "Compound Bow", "Crude Bow", "Death Bow", "Decimation Bow",
        "Decurve Bow", "Grove Bow", "Harbinger Bow", "Highborn Bow",
        "Imperial Bow", "Ivory Bow", "Long Bow", "Maraketh Bow",
        "Ranger Bow", "Recurve Bow", "Reflex Bow", "Royal Bow",
        "Short Bow", "Sniper Bow", "Spine Bow", "Steelwood Bow",
        "Thicket Bow",
    ]),
    (ItemClass::BodyArmour, &[
        "Arena Plate", "Assassin's Garb", "Astral Plate", "Battle Lamellar",
        "Battle Plate", "Blood Raiment", "Bone Armour", "Bronze Plate",
        "Buckskin Tunic", "Cabalist Regalia", "Carnal Armour", "Chain Hauberk",
        "Chainmail Doublet", "Chainmail Tunic", "Chainmail Vest", "Chestplate",
        "Colosseum Plate", "Commander's Brigandine", "Conjurer's Vestment",
        "Conquest Chainmail", "Copper Plate", "Coronal Leather", "Cutthroat's Garb",
        "Desert Brigandine", "Destiny Leather", "Destroyer Regalia", "Devout Chainmail",
        "Elegant Ringmail", "Exquisite Leather", "Field Lamellar", "Frontier Leather",
        "Full Chainmail", "Full Dragonscale", "Full Leather", "Full Plate",
        "Full Ringmail", "Full Scale Armour", "Full Wyrmscale", "General's Brigandine",
        "Gladiator Plate", "Glorious Leather", "Glorious Plate", "Golden Mantle",
        "Golden Plate", "Holy Chainmail", "Hussar Brigandine", "Infantry Brigandine",
        "Lacquered Garb", "Latticed Ringmail", "Light Brigandine", "Lordly Plate",
        "Loricated Ringmail", "Mage's Vestment", "Majestic Plate", "Necromancer Silks",
        "Occultist's Vestment", "Oiled Coat", "Oiled Vest", "Ornate Ringmail",
        "Padded Jacket", "Padded Vest", "Plate Vest", "Quilted Jacket",
        "Ringmail Coat", "Sacrificial Garb", "Sadist Garb", "Sage's Robe",
        "Saint's Hauberk", "Saintly Chainmail", "Savant's Robe", "Scale Doublet",
        "Scale Vest", "Scarlet Raiment", "Scholar's Robe", "Sentinel Jacket",
        "Shabby Jerkin", "Sharkskin Tunic", "Silk Robe", "Silken Garb",
        "Silken Vest", "Silken Wrap", "Simple Robe", "Sleek Coat",
        "Soldier's Brigandine", "Spidersilk Robe", "Strapped Leather", "Sun Leather",
        "Sun Plate", "Thief's Garb", "Triumphant Lamellar", "Vaal Regalia",
        "Varnished Coat", "War Plate", "Waxed Garb", "Widowsilk Robe",
        "Wild Leather", "Wyrmscale Doublet", "Zodiac Leather",
    ]),
    (ItemClass::Claw, &[
        "Awl", "Blinder", "Cat's Paw", "Double Claw", "Eagle Claw",
        "Eye Gouger", "Fright Claw", "Gemini Claw", "Gouger", "Great White Claw",
        "Hellion's Paw", "Imperial Claw", "Nailed Fist", "Prehistoric Claw",
        "Sharktooth Claw", "Sparkling Claw", "Terror Claw", "Thresher Claw",
        "Throat Stabber", "Tiger's Paw", "Timeworn Claw", "Twin Claw",
        "Vaal Claw",
    ]),
    (ItemClass::Dagger, &[
        "Ambusher", "Boot Blade", "Boot Knife", "Butcher Knife", "Carving Knife",
        "Copper Kris", "Demon Dagger", "Ezomyte Dagger", "Fiend Dagger", "Flaying Knife",
        "Glass Shank", "Golden Kris", "Gutting Knife", "Imp Dagger", "Imperial Skean",
        "Platinum Kris", "Poignard", "Prong Dagger", "Royal Skean", "Sai",
        "Skean", "Skinning Knife", "Slaughter Knife", "Stiletto", "Trisula",
    ]),
    (ItemClass::Gloves, &[
        "Ambush Mitts", "Ancient Gauntlets", "Antique Gauntlets", "Arcanist Gloves",
        "Assassin's Mitts", "Bronze Gauntlets", "Bronzescale Gauntlets", "Carnal Mitts",
        "Chain Gloves", "Clasped Mitts", "Conjurer Gloves", "Crusader Gloves",
        "Deerskin Gloves", "Dragonscale Gauntlets", "Eelskin Gloves", "Embroidered Gloves",
        "Fingerless Silk Gloves", "Fishscale Gauntlets", "Goathide Gloves", "Golden Bracers",
        "Gripped Gloves", "Hydrascale Gauntlets", "Iron Gauntlets", "Ironscale Gauntlets",
        "Leatherscale Gloves", "Mesh Gloves", "Murder Mitts", "Nubuck Gloves",
        "Plated Gauntlets", "Rawhide Gloves", "Riveted Gloves", "Samite Gloves",
        "Satin Gloves", "Serpentscale Gauntlets", "Shagreen Gloves", "Sharkskin Gloves",
        "Silk Gloves", "Slink Gloves", "Soldier Gloves", "Sorcerer Gloves",
        "Spiked Gloves", "Stealth Gloves", "Steel Gauntlets", "Titan Gauntlets",
        "Trapper Mitts", "Vaal Gauntlets", "Velvet Gloves", "Wool Gloves",
        "Wrapped Mitts", "Zealot Gloves",
    ]),
    (ItemClass::Helmet, &[
        "Aventail Helmet", "Barbute Helmet", "Bone Circlet", "Bone Helmet",
        "Close Helmet", "Cone Helmet", "Crusader Helmet", "Deicide Mask",
        "Eternal Burgonet", "Ezomyte Burgonet", "Fencer Helm", "Festival Mask",
        "Fluted Bascinet", "Gilded Sallet", "Gladiator Helmet", "Golden Mask",
        "Golden Wreath", "Great Crown", "Great Helmet", "Harlequin Mask",
        "Hubris Circlet", "Hunter Hood", "Iron Circlet", "Iron Hat",
        "Iron Mask", "Lacquered Helmet", "Leather Cap", "Leather Hood",
        "Lion Pelt", "Lunaris Circlet", "Magistrate Crown", "Mind Cage",
        "Necromancer Circlet", "Nightmare Bascinet", "Noble Tricorne", "Pig-Faced Bascinet",
        "Plague Mask", "Praetor Crown", "Prophet Crown", "Raven Mask",
        "Reaver Helmet", "Regicide Mask", "Royal Burgonet", "Rusted Coif",
        "Sallet", "Samite Helmet", "Scare Mask", "Secutor Helm",
        "Siege Helmet", "Silken Hood", "Sinner Tricorne", "Solaris Circlet",
        "Soldier Helmet", "Steel Circlet", "Torture Cage", "Tribal Circlet",
        "Tricorne", "Ursine Pelt", "Vaal Mask", "Vine Circlet",
        "Visored Sallet", "Wolf Pelt", "Zealot Helmet",
    ]),
    (ItemClass::OneHandAxe, &[
        "Arming Axe", "Boarding Axe", "Butcher Axe", "Cleaver", "Engraved Hatchet",
        "Etched Hatchet", "Infernal Axe", "Jade Hatchet", "Jasper Axe", "Karui Axe",
        "Reaver Axe", "Runic Hatchet", "Rusted Hatchet", "Siege Axe", "Spectral Axe",
        "Tomahawk", "Vaal Hatchet", "Wraith Axe", "Wrist Chopper",
    ]),
    (ItemClass::OneHandMace, &[
        "Ancestral Club", "Auric Mace", "Barbed Club", "Behemoth Mace", "Bladed Mace",
        "Ceremonial Mace", "Dragon Mace", "Driftwood Club", "Flanged Mace", "Gavel",
        "Legion Hammer", "Nightmare Mace", "Ornate Mace", "Pernach", "Phantom Mace",
        "Rock Breaker", "Spiked Club", "Stone Hammer", "Tenderizer", "Tribal Club",
        "War Hammer", "Wyrm Mace",
    ]),
    (ItemClass::OneHandSword, &[
        "Ancient Sword", "Battle Sword", "Broad Sword", "Copper Sword", "Corsair Sword",
        "Cutlass", "Elder Sword", "Elegant Sword", "Eternal Sword", "Gemstone Sword",
        "Gladius", "Graceful Sword", "Hook Sword", "Legion Sword", "Rusted Sword",
        "Sabre", "Tiger Hook", "Twilight Blade", "Vaal Blade", "War Sword",
        "Basket Rapier", "Courtesan Sword", "Dragonbone Rapier", "Dragoon Sword",
        "Estoc", "Fancy Foil", "Harpy Rapier", "Jewelled Foil", "Pecoraro",
        "Primeval Rapier", "Rusted Spike", "Serrated Foil", "Smallsword",
        "Spiraled Foil", "Thorn Rapier", "Vaal Rapier", "Whalebone Rapier",
        "Wyrmbone Rapier",
    ]),
    (ItemClass::Quiver, &[
        "Blunt Arrow Quiver", "Broadhead Arrow Quiver", "Conductive Quiver",
        "Feathered Arrow Quiver", "Fire Arrow Quiver", "Heavy Quiver",
        "Light Quiver", "Penetrating Arrow Quiver", "Serrated Arrow Quiver",
        "Sharktooth Arrow Quiver", "Spike-Point Arrow Quiver", "Two-Point Arrow Quiver",
    ]),
    (ItemClass::Ring, &[
        "Amethyst Ring", "Breach Ring", "Cerulean Ring", "Coral Ring",
        "Diamond Ring", "Gold Ring", "Iolite Ring", "Iron Ring",
        "Moonstone Ring", "Opal Ring", "Paua Ring", "Prismatic Ring",
        "Ruby Ring", "Sapphire Ring", "Steel Ring", "Topaz Ring",
        "Two-Stone Ring", "Unset Ring", "Vermillion Ring",
    ]),
    (ItemClass::Sceptre, &[
        "Abyssal Sceptre", "Blood Sceptre", "Bronze Sceptre", "Carnal Sceptre",
        "Crystal Sceptre", "Darkwood Sceptre", "Driftwood Sceptre", "Grinning Fetish",
        "Horned Sceptre", "Iron Sceptre", "Karui Sceptre", "Lead Sceptre",
        "Ochre Sceptre", "Opal Sceptre", "Platinum Sceptre", "Quartz Sceptre",
        "Ritual Sceptre", "Royal Sceptre", "Sambar Sceptre", "Sekhem",
        "Shadow Sceptre", "Stag Sceptre", "Tyrant's Sekhem", "Vaal Sceptre",
        "Void Sceptre",
    ]),
    (ItemClass::Shield, &[
        "Alder Spiked Shield", "Ancient Spirit Shield", "Archon Kite Shield", "Bone Spirit Shield",
        "Brass Spirit Shield", "Branded Kite Shield", "Bronze Tower Shield", "Buckskin Tower Shield",
        "Burnished Spiked Shield", "Cardinal Round Shield", "Ceremonial Kite Shield", "Chiming Spirit Shield",
        "Colossal Tower Shield", "Compound Spiked Shield", "Copper Tower Shield", "Corroded Tower Shield",
        "Crested Tower Shield", "Crimson Round Shield", "Ebony Tower Shield", "Elegant Round Shield",
        "Enameled Buckler", "Ezomyte Spiked Shield", "Ezomyte Tower Shield", "Fossilised Spirit Shield",
        "Girded Tower Shield", "Gilded Buckler", "Golden Buckler", "Harmonic Spirit Shield",
        "Hammered Buckler", "Imperial Buckler", "Ironwood Buckler", "Ivory Spirit Shield",
        "Jingling Spirit Shield", "Lacewood Spirit Shield", "Laminated Kite Shield", "Linden Kite Shield",
        "Mahogany Tower Shield", "Mirrored Spiked Shield", "Oak Buckler", "Ornate Spiked Shield",
        "Painted Buckler", "Painted Tower Shield", "Pine Buckler", "Plank Kite Shield",
        "Polished Spiked Shield", "Reinforced Kite Shield", "Reinforced Tower Shield", "Rawhide Tower Shield",
        "Redwood Spiked Shield", "Rotted Round Shield", "Sharpened Spiked Shield", "Shagreen Tower Shield",
        "Spiked Bundle", "Spiked Round Shield", "Splendid Round Shield", "Steel Kite Shield",
        "Studded Round Shield", "Supreme Spiked Shield", "Tarnished Spirit Shield", "Teak Round Shield",
        "Titanium Spirit Shield", "Twig Spirit Shield", "Vaal Buckler", "Vaal Spirit Shield",
        "War Buckler", "Yew Spirit Shield",
    ]),
    (ItemClass::Staff, &[
        "Crescent Staff", "Eclipse Staff", "Gnarled Branch", "Highborn Staff", "Imperial Staff",
        "Lathi", "Long Staff", "Primitive Staff", "Primordial Staff", "Quarterstaff",
        "Royal Staff", "Woodful Staff",
    ]),
    (ItemClass::TwoHandAxe, &[
        "Abyssal Axe", "Dagger Axe", "Despot Axe", "Double Axe", "Ezomyte Axe",
        "Fleshripper", "Gilded Axe", "Headsman Axe", "Jade Chopper", "Jasper Chopper",
        "Karui Chopper", "Labrys", "Noble Axe", "Poleaxe", "Shadow Axe",
        "Splitting Axe", "Stone Axe", "Sundering Axe", "Talon Axe", "Timber Axe",
        "Vaal Axe", "Void Axe",
    ]),
    (ItemClass::TwoHandMace, &[
        "Brass Maul", "Colossus Mallet", "Coronal Maul", "Driftwood Maul", "Dread Maul",
        "Fright Maul", "Great Mallet", "Imperial Maul", "Jagged Maul", "Karui Maul",
        "Mallet", "Meatgrinder", "Morning Star", "Piledriver", "Sledgehammer",
        "Spiny Maul", "Steelhead", "Terror Maul", "Totemic Maul", "Tribal Maul",
    ]),
    (ItemClass::TwoHandSword, &[
        "Bastard Sword", "Butcher Sword", "Corroded Blade", "Curved Blade", "Engraved Greatsword",
        "Etched Greatsword", "Exquisite Blade", "Ezomyte Blade", "Footman Sword", "Headman's Sword",
        "Highland Blade", "Infernal Sword", "Lion Sword", "Lithe Blade", "Ornate Sword", "Reaver Sword", "Spectral Sword", "Tiger Sword", "Two-Handed Sword",
        "Vaal Greatsword", "Wraith Sword",
    ]),
    (ItemClass::Wand, &[
        "Carved Wand", "Crystal Wand", "Demon's Horn", "Driftwood Wand", "Engraved Wand",
        "Faun's Horn", "Goat's Horn", "Heathen Wand", "Imbued Wand", "Omen Wand",
        "Opal Wand", "Pagan Wand", "Profane Wand", "Prophecy Wand", "Quartz Wand",
        "Sage Wand", "Serpent Wand", "Spiraled Wand", "Tornado Wand",
    ]),
    (ItemClass::Warstaff, &[
        "Coiled Staff", "Ezomyte Staff", "Foul Staff", "Iron Staff", "Judgement Staff",
        "Maelström Staff", "Military Staff", "Serpentine Staff", "Vile Staff",
    ]),
];
