/// Numéros historiquement les plus sortis, graine du pool en mode pondéré.
pub const FREQUENT_NUMBERS: [u8; 24] = [
    3, 4, 10, 14, 17, 20, 22, 24, 31, 38, 39, 42,
    44, 46, 48, 53, 56, 58, 62, 64, 66, 68, 69, 70,
];
