//! Embedded marker libraries.
//!
//! One table of 1000 codewords per grid size, produced offline by a seeded greedy
//! search: each accepted codeword keeps at least the current Hamming distance to
//! every earlier codeword in all four rotations, to its own rotations, and to the
//! all-black and all-white grids, and the distance is lowered only when no
//! candidate fits. Smaller libraries are prefixes of the table, so the first 50
//! codewords are the 50-marker library and keep the widest spacing.
//!
//! Bits are row-major with the top-left cell as the most significant bit; a set
//! bit is a white cell.

pub const CODEBOOK_SEED: u64 = 0x5255_4C45;

/// Codewords per table.
pub const CODEBOOK_N: usize = 1000;

/// Library sizes that index [`min_distance`].
pub const LIBRARY_SIZES: [usize; 4] = [50, 100, 250, 1000];

const MIN_DISTANCE_4X4: [u32; 4] = [4, 4, 3, 2];
const MIN_DISTANCE_5X5: [u32; 4] = [8, 7, 6, 5];
const MIN_DISTANCE_6X6: [u32; 4] = [12, 12, 11, 9];
const MIN_DISTANCE_7X7: [u32; 4] = [18, 17, 16, 14];

/// Codeword table for an `n` x `n` grid, `None` for unsupported sizes.
pub fn table(grid_size: usize) -> Option<&'static [u64; CODEBOOK_N]> {
    match grid_size {
        4 => Some(&CODEBOOK_4X4),
        5 => Some(&CODEBOOK_5X5),
        6 => Some(&CODEBOOK_6X6),
        7 => Some(&CODEBOOK_7X7),
        _ => None,
    }
}

/// Smallest Hamming distance between any two codewords of the first
/// `library_size` entries, rotations and uniform grids included.
pub fn min_distance(grid_size: usize, library_size: usize) -> Option<u32> {
    let distances = match grid_size {
        4 => MIN_DISTANCE_4X4,
        5 => MIN_DISTANCE_5X5,
        6 => MIN_DISTANCE_6X6,
        7 => MIN_DISTANCE_7X7,
        _ => return None,
    };
    let index = LIBRARY_SIZES.iter().position(|&s| s == library_size)?;
    Some(distances[index])
}

#[rustfmt::skip]
pub static CODEBOOK_4X4: [u64; CODEBOOK_N] = [
    0x38F1, 0xE1E8, 0x053B, 0xA691, 0xB31A, 0xBF70, 0x2B9F, 0xAD86, 0x6CE7, 0x2B28,
    0xDECB, 0xF662, 0xF86B, 0xF418, 0x22E0, 0x3085, 0x7E8C, 0xD221, 0x4297, 0x58FA,
    0xDD9D, 0x0BC3, 0x7D6D, 0x9D2A, 0x5930, 0xA27D, 0x55C8, 0x7064, 0x5F63, 0x7033,
    0xE5F2, 0xD248, 0xFCD1, 0x37CE, 0x008B, 0x5EB6, 0x27B8, 0x6229, 0x5BB9, 0xD968,
    0x73DA, 0x2B55, 0x04B5, 0xDF4C, 0xB1A4, 0x433A, 0x04C1, 0xEE17, 0x6EB0, 0x81D3,
    0x5C0B, 0xE2F1, 0x5E68, 0x9C8F, 0xC854, 0x672C, 0xECDA, 0x08F4, 0x1CD9, 0x08A1,
    0x6757, 0x67BF, 0xA648, 0x16A4, 0x24DB, 0x402E, 0x0F4A, 0x3725, 0xF193, 0x9198,
    0x8E35, 0x2A1C, 0x4F3D, 0x889D, 0xEC3D, 0xD9B6, 0x3898, 0x9FB2, 0x370B, 0x01B2,
    0x507F, 0x3555, 0xD175, 0x6EE9, 0x0A56, 0x6905, 0x2171, 0x19B5, 0x2878, 0x02D8,
    0x49F7, 0xAC66, 0xCD58, 0xBA73, 0x7E56, 0x1A9E, 0x7114, 0x9051, 0xED14, 0xFD5E,
    0x2772, 0x4B14, 0x1AE9, 0xDA46, 0xC7DF, 0xDE2D, 0x9AE2, 0x2F2F, 0xCDBA, 0xFC96,
    0xFB76, 0xEBCC, 0xDC67, 0xB4C0, 0x4923, 0x0CEE, 0x3F66, 0x51D1, 0x179C, 0x47B4,
    0x754B, 0x6541, 0x6871, 0xAB0D, 0x298B, 0x72C4, 0x1839, 0x9741, 0xC357, 0xE951,
    0xCE6B, 0x4113, 0x7019, 0x048C, 0x6F0A, 0xF866, 0xB5FA, 0xCB78, 0xFDA5, 0x9D75,
    0x6CD6, 0x705E, 0x1A0C, 0x61CC, 0x6319, 0x0848, 0xB98F, 0x5B0D, 0xBA3F, 0x5674,
    0x53FF, 0x6393, 0x0426, 0xAA04, 0xF1ED, 0x24E5, 0xC735, 0x7EE3, 0x43EB, 0x2FE1,
    0xF4CA, 0xA7CD, 0x109D, 0x0285, 0xB58A, 0x1DFD, 0xDDD6, 0x1F5B, 0x00B9, 0x049F,
    0xBF6F, 0xE35C, 0xCF2C, 0x428A, 0x6D53, 0xBB99, 0xA04A, 0x8548, 0xB4CF, 0x601C,
    0xBBCB, 0x9004, 0x2AA2, 0x8837, 0xA82E, 0x7A3A, 0x49DB, 0xC9B9, 0xE123, 0x5423,
    0xAD03, 0x2317, 0xC05A, 0x8729, 0xCC40, 0x4AB8, 0x7FB1, 0xFE3C, 0x98E8, 0x0715,
    0x9E5F, 0x9323, 0xCA7F, 0xC2D9, 0x8E38, 0x8ED0, 0x420F, 0x4798, 0xE22A, 0x73AB,
    0x41D2, 0x8214, 0x9E64, 0xA33C, 0x70EA, 0x9927, 0xE57B, 0x49F0, 0xAE02, 0x740C,
    0x3407, 0x72B5, 0x14FE, 0x68CA, 0xCDE0, 0xCFA2, 0xB29C, 0xB036, 0xAA32, 0xCFA9,
    0x1946, 0x1996, 0x7F3F, 0xA55A, 0x06BA, 0xB08E, 0xDF72, 0x6BDD, 0xB65A, 0x9B9F,
    0x8C01, 0x56EC, 0xD3E8, 0xE13A, 0x6B73, 0xEE8E, 0xD4DC, 0x5098, 0x88A4, 0x131F,
    0xB0E9, 0xD2B4, 0x073C, 0x1D23, 0x1E07, 0x7935, 0x6150, 0x4220, 0xE4E0, 0xDB4A,
    0x4991, 0x4032, 0x5B52, 0x2C28, 0x9E4A, 0x4CF2, 0x9EFE, 0x216D, 0xB431, 0x31F2,
    0xBC22, 0xBC09, 0xEB45, 0x6AF4, 0x64FF, 0x9A20, 0x1F31, 0x2EC8, 0x21C1, 0x9ACC,
    0xD47E, 0xF1A1, 0x0E6C, 0x4E83, 0xFB50, 0xA532, 0x5637, 0xD133, 0x950B, 0xB6C9,
    0x99F7, 0xFA55, 0x17B6, 0x92F1, 0xBAB5, 0xEDF1, 0x6539, 0x6C33, 0x35E9, 0xA1E3,
    0xF4A8, 0x37A2, 0xE9B4, 0xDC14, 0x1FA0, 0xEEBF, 0xE3F7, 0x27D1, 0x5CAA, 0xC796,
    0xFCE9, 0x8922, 0x32ED, 0xD665, 0xBEF4, 0xCB0E, 0x5F00, 0xEAD8, 0xD7B8, 0xE213,
    0x1508, 0x76F6, 0x6D2B, 0x5D29, 0x269D, 0xD5F9, 0x0A34, 0x941E, 0x3B78, 0x5694,
    0x9B94, 0x779B, 0x810A, 0xC31B, 0xB85E, 0xE7BA, 0x478B, 0x8EA1, 0xE265, 0xD8FF,
    0xF35F, 0x1093, 0x2601, 0x84AE, 0x56E2, 0x2E1A, 0xF6EE, 0x4D2E, 0x4D9E, 0xAFAA,
    0x9A1D, 0x323D, 0x521A, 0xA5A8, 0xB617, 0xF8F3, 0x50E5, 0x03FE, 0x06E8, 0x004F,
    0xFD44, 0xE29D, 0xDC13, 0x7C1A, 0xD0D0, 0x6A01, 0xD59B, 0x2DFB, 0x1F95, 0xAAE5,
    0xADD3, 0xAC8D, 0xF385, 0x313B, 0x0DAD, 0x3444, 0xE72F, 0xD985, 0x22F5, 0xC2C2,
    0xDB19, 0xB59C, 0xD330, 0x69C0, 0xC8E9, 0x43F8, 0xB5D7, 0x922C, 0xEF00, 0xC1DC,
    0x10A6, 0x7D0E, 0xB739, 0x1A51, 0xE0CE, 0x930E, 0xA4B3, 0xD72B, 0x2012, 0x4E29,
    0x2A77, 0x8FCE, 0x9A54, 0x4EAE, 0x6E06, 0x9538, 0x4254, 0xCB98, 0xFF9E, 0x1A1B,
    0x9CB1, 0xFEDC, 0x1136, 0xEE72, 0x3199, 0xDBD7, 0x101E, 0x1849, 0xC583, 0xB44A,
    0x6E10, 0x9D3C, 0xAE52, 0x3EC4, 0x722C, 0xF297, 0x26A9, 0x5F97, 0x7749, 0xFAAA,
    0x826E, 0xC02D, 0x3E64, 0xD0F4, 0x5097, 0xFF4D, 0x3091, 0x0CC8, 0x36F5, 0x2972,
    0xBE3D, 0x17D5, 0x69DF, 0x8199, 0x6EEA, 0xEF7D, 0x99BD, 0x373A, 0x18AE, 0x4C41,
    0x1732, 0xC8DE, 0xA9BA, 0xEE7F, 0xE1BC, 0x57D3, 0x8319, 0xA779, 0xFE97, 0xE861,
    0x5764, 0x352E, 0xD0CB, 0xB99E, 0xF6C5, 0x1481, 0xA1B3, 0xFEB6, 0x193A, 0x9B8E,
    0x589B, 0xE6ED, 0xD2D1, 0x1B07, 0x85F6, 0x51B0, 0xF97D, 0xEC03, 0x4247, 0x8271,
    0xC26C, 0x9FA1, 0x6596, 0xA407, 0x1B6B, 0x6824, 0x857F, 0x4530, 0xA364, 0x4500,
    0x5936, 0x2658, 0xDAF3, 0x69F5, 0x41A9, 0x5951, 0x26A6, 0xA909, 0xC569, 0xE89C,
    0xBCE5, 0x2E76, 0xE334, 0x0D15, 0xDFFA, 0xAD6F, 0xEFC9, 0x74E8, 0x35D6, 0xA547,
    0xCB21, 0x5291, 0xEE0C, 0x8430, 0x259F, 0x7EBC, 0x3247, 0x0670, 0xE383, 0x4F34,
    0x088D, 0x7FCE, 0xD01D, 0x4BBD, 0x730C, 0x829F, 0x2822, 0x8D35, 0x6715, 0xECC2,
    0xE78A, 0xBD76, 0x4215, 0xCA32, 0x93BA, 0xA7B5, 0xD1E9, 0x268A, 0x0A3F, 0xB3FD,
    0x36B2, 0x679A, 0xE474, 0x9D72, 0x1018, 0x85BA, 0x558F, 0x99ED, 0x57DF, 0x7D26,
    0xA96D, 0xA867, 0xA382, 0x91FF, 0x4E8F, 0x653E, 0x399A, 0xB1D1, 0xF059, 0x7493,
    0x93E2, 0xBAD2, 0x085B, 0x20D7, 0x4D94, 0xEC16, 0x0B3B, 0x825D, 0xB8A7, 0x96DA,
    0x525E, 0x4EC2, 0xFB91, 0xA21F, 0xD056, 0x336C, 0x8DA2, 0xA18E, 0x91CA, 0x2D35,
    0xFDDB, 0x2C5A, 0xBAB6, 0x7CD5, 0x5BE3, 0x9C47, 0x2DA3, 0x12BE, 0x8144, 0x04BE,
    0xEDC1, 0xB869, 0xAA86, 0x9F6D, 0x6994, 0x33A7, 0xDC45, 0x1E88, 0x78F2, 0x3452,
    0x86D6, 0x6799, 0x39F9, 0x4E70, 0x3215, 0xF93F, 0xF5EE, 0x80B0, 0xB7E1, 0x9216,
    0x6E52, 0x43C1, 0x02B6, 0xD79E, 0xEFA0, 0x0E5B, 0xDF6F, 0xB0E2, 0x35F1, 0x9106,
    0xBE07, 0x62E9, 0x1CDF, 0x1D2C, 0x8D41, 0x629F, 0x5AE6, 0xC97B, 0x0625, 0xB780,
    0xFDB6, 0x98EB, 0x5F1F, 0x0135, 0xD65C, 0x037D, 0x102D, 0x7083, 0x068E, 0x8050,
    0xEF8C, 0xA938, 0x0485, 0x1D74, 0x4885, 0xBFDB, 0x618A, 0x47A9, 0x2210, 0x8998,
    0xD2A2, 0xDEE2, 0x6591, 0x3104, 0xCEB5, 0xE450, 0xF08C, 0x9EB4, 0x7D01, 0xC34B,
    0x054A, 0xA853, 0x1B9B, 0x03A7, 0x9324, 0x2B99, 0xAF07, 0x83F1, 0xD77F, 0xB97E,
    0x47E6, 0x7A11, 0x36B7, 0x91A0, 0xBE2F, 0x8F7A, 0x9704, 0xCF20, 0xC9F4, 0x6C1F,
    0xFFF8, 0xC3F9, 0x7B3E, 0xC884, 0x1E77, 0x1941, 0x6716, 0xAB00, 0x2DC1, 0xC201,
    0x35BB, 0xC4DE, 0xBBE0, 0xE0B4, 0xDAD9, 0xF048, 0xE6D0, 0x0648, 0xF254, 0x521D,
    0x186A, 0x6DDC, 0xB18B, 0xDE8F, 0x77DC, 0x1A4A, 0x3D1C, 0x76B8, 0xD6E3, 0xC95C,
    0x4C30, 0x497A, 0x2FC4, 0x017F, 0xADD0, 0x781C, 0x2A6D, 0x9D1A, 0xE981, 0x13F9,
    0xA024, 0xC3C8, 0x87FF, 0xEAA2, 0x1A00, 0x4E1C, 0x2301, 0x4C47, 0xF225, 0xE9AB,
    0xEA20, 0x0D0B, 0x23B3, 0xB079, 0x1DD5, 0xE179, 0xBA8D, 0x7855, 0xFE7A, 0x2FD5,
    0xB498, 0x4E5E, 0x1BD1, 0xD993, 0x4944, 0x2FAE, 0x23D0, 0xD733, 0x189F, 0x13C5,
    0x1B85, 0xBF64, 0x1055, 0xFAFE, 0x34CA, 0xA81A, 0x6090, 0x0C35, 0xD3CA, 0x623A,
    0xD89C, 0x905C, 0xF516, 0xB36E, 0xB9B7, 0x3B3D, 0x4551, 0xE3A6, 0xB371, 0xF651,
    0x825B, 0x8989, 0x41CB, 0x07F0, 0x71E6, 0x469B, 0x654D, 0xB9F1, 0x15FB, 0xD82B,
    0xAB23, 0x42E2, 0x962D, 0x706F, 0x850C, 0xC4AC, 0x4D63, 0x59FC, 0xCE67, 0x2657,
    0xB874, 0x54F4, 0x1CC6, 0xB7B2, 0x0C7B, 0xBA38, 0x2B82, 0xF952, 0x28C0, 0xD0F2,
    0x620C, 0xD27E, 0x50F8, 0x08FF, 0xCC7E, 0xD8F0, 0x5A86, 0x3C74, 0x5F6C, 0xE287,
    0xF54D, 0x0068, 0x2BE2, 0xC308, 0x0985, 0xA952, 0xE6B8, 0xE926, 0x5EEB, 0xFAD1,
    0x0895, 0xC421, 0x4093, 0x0EA4, 0x0DB4, 0xD390, 0x04FD, 0xE657, 0x868F, 0x9534,
    0xBD2D, 0x0D87, 0xC2CC, 0x3C6B, 0xE7F5, 0x765D, 0xC20C, 0x6A8C, 0x7C3F, 0xD7F0,
    0x7E04, 0x85B3, 0xF400, 0x3B8C, 0xC8A7, 0xF61C, 0x4096, 0x3A95, 0x30A4, 0xF435,
    0xDC2A, 0x154E, 0x94B4, 0xBCC1, 0xF0F0, 0xC747, 0x562E, 0xA316, 0xEA88, 0x5F47,
    0x0701, 0x1AE3, 0x1E29, 0x363E, 0x2079, 0x83DB, 0xF0AE, 0x5D42, 0xAF9B, 0xD88B,
    0x8CC5, 0xC3EE, 0x2B47, 0xE412, 0x74A3, 0x05DC, 0x4BF3, 0x7BA5, 0xA875, 0xE086,
    0xE6C7, 0xB30D, 0x2BBE, 0x9F37, 0x1F76, 0x2A7C, 0x7C9C, 0xE949, 0xCE89, 0x1E82,
    0xFB9B, 0x73A0, 0x9EEA, 0x41E2, 0x304D, 0x448A, 0xBA9B, 0xF230, 0x479E, 0xC5CB,
    0x18B0, 0xEA6E, 0x6669, 0x6913, 0xD5BC, 0xEFDA, 0x7C67, 0xD849, 0x2923, 0xBBA5,
    0x388D, 0x8792, 0xEA1B, 0xBF48, 0x8FC2, 0xEFF6, 0xC49D, 0x2222, 0xDEFF, 0x5C65,
    0xD078, 0x626C, 0xF520, 0x2003, 0x1544, 0x5410, 0xF9C0, 0x87A7, 0x8B03, 0x1609,
    0x3392, 0x9FD6, 0x1721, 0xCD1E, 0x0257, 0x4344, 0x5EC8, 0x3000, 0xA3EB, 0x377F,
    0xA587, 0xAE3F, 0xE7E3, 0x189A, 0xA2E8, 0x77C5, 0x11E8, 0x2227, 0x94A7, 0xBD7B,
    0x4D3C, 0x3A79, 0x5D03, 0x40B1, 0xE31F, 0x034A, 0x2750, 0x1BB8, 0x2AE6, 0x7A1B,
    0x5E7C, 0x6ACF, 0xBFF1, 0x8537, 0x069C, 0xE3F8, 0x7C39, 0x285C, 0x3B49, 0x4456,
    0x468D, 0x187B, 0xBF36, 0x7FB7, 0x12C7, 0x8AB9, 0x1845, 0x7CBE, 0x7C11, 0xCC5C,
    0x63F2, 0x6CAE, 0x13AD, 0xAA7B, 0x799B, 0x45C4, 0x27A1, 0x6DAC, 0x8D9E, 0xC7B9,
    0x2CDF, 0x80ED, 0xB3E6, 0xA582, 0x0318, 0x5129, 0x0087, 0x3F38, 0x3931, 0xEF28,
];

#[rustfmt::skip]
pub static CODEBOOK_5X5: [u64; CODEBOOK_N] = [
    0x08F5699, 0x10ACAD7, 0x1447CF8, 0x06C85DB, 0x1CFC442, 0x16962E1, 0x007B0CE, 0x1E41E9F,
    0x0BF8A51, 0x15A0A6A, 0x188517C, 0x0C79133, 0x02E311A, 0x032E70C, 0x07AA293, 0x11D7F1D,
    0x0D31EA6, 0x13124D4, 0x02B97A7, 0x018943E, 0x155D2A7, 0x1A629AE, 0x0744257, 0x002DE60,
    0x18B067E, 0x17528AB, 0x0182D5B, 0x0174E04, 0x1B37401, 0x0BB7927, 0x0E571ED, 0x0613BA2,
    0x1086A24, 0x09AA546, 0x077BD09, 0x13BDC48, 0x0F70DE5, 0x0115388, 0x163988F, 0x1C26F4C,
    0x1B6E8F7, 0x05E676E, 0x1F88684, 0x1F597F0, 0x1A5BAAD, 0x1D3BF12, 0x0DD3EFC, 0x1E7AE7C,
    0x0BBC6CB, 0x0160EAB, 0x1AD6199, 0x0C08A59, 0x0EC03AC, 0x1972A56, 0x0433C5C, 0x037F024,
    0x16FF635, 0x079272D, 0x026A854, 0x102F736, 0x07B431A, 0x1FCABB9, 0x1950F28, 0x1943958,
    0x15FC4BC, 0x122FCA5, 0x0DE3637, 0x0F6D7AD, 0x1A36786, 0x0643754, 0x14AE51B, 0x0E8614E,
    0x17C8955, 0x18F6C8C, 0x1CBFA67, 0x1BC32F3, 0x15A6250, 0x0D9CA16, 0x00A92DA, 0x0FA3363,
    0x00FA74A, 0x11232EE, 0x0B7910A, 0x07104FB, 0x1143C29, 0x0546330, 0x1AB8C98, 0x19D57AF,
    0x1A34AF6, 0x00136C7, 0x189244B, 0x16DBE9C, 0x0967CFD, 0x14CCFAA, 0x02DD32D, 0x156B11C,
    0x013D569, 0x034C48B, 0x1DB0CC7, 0x1488381, 0x0A8CC86, 0x1A6B9F0, 0x19DEDD4, 0x025F99B,
    0x099742D, 0x10402B3, 0x0DD0350, 0x1104A1D, 0x0C95E6E, 0x0E3F959, 0x12A8EEB, 0x13EFF6A,
    0x066E469, 0x093EF78, 0x10DD959, 0x1BFD705, 0x010BD8C, 0x00469A8, 0x175A9B4, 0x0648A2D,
    0x1EE7AF4, 0x1119B04, 0x10DC212, 0x109BA38, 0x18F6E71, 0x0447F01, 0x0FD47E9, 0x1262FC7,
    0x1EFF286, 0x0486882, 0x03FBF3C, 0x06D2FFA, 0x15EC28B, 0x17023E4, 0x172EADE, 0x1A89CC1,
    0x11CC758, 0x1BCF579, 0x1E28B86, 0x01A1E51, 0x00CC144, 0x1D5CDAD, 0x13CD9AF, 0x008C615,
    0x0968FD0, 0x1C1F50A, 0x06D3E49, 0x103172A, 0x107B837, 0x17D85CC, 0x1916ECE, 0x0DE3902,
    0x164D39D, 0x14DF9E6, 0x0539362, 0x1EDB01B, 0x1403163, 0x198362A, 0x0F88D1E, 0x160D84A,
    0x148B5B4, 0x1345BF1, 0x057A427, 0x077CD3A, 0x1FA5829, 0x0325B36, 0x1FC817A, 0x01F3520,
    0x1611B39, 0x019EFAF, 0x0B3A1DB, 0x0ADA7C7, 0x0816BEB, 0x1574781, 0x05E5EE8, 0x151CE53,
    0x02D3935, 0x167D3E4, 0x119713B, 0x10C970E, 0x030DC5F, 0x0B81697, 0x10581AC, 0x07C8F79,
    0x11BA9C8, 0x0B60044, 0x164F51E, 0x0D2968B, 0x03ED2C5, 0x1195066, 0x17C2353, 0x18FB3FB,
    0x182A46E, 0x1C86929, 0x0AD3CE4, 0x1F3362C, 0x1B0B520, 0x1C317EC, 0x130E6EC, 0x15ABC1D,
    0x185765E, 0x09203B2, 0x151146F, 0x02062CA, 0x062AF1E, 0x0F29BA3, 0x05B4C49, 0x050B083,
    0x16D6842, 0x05F9AB2, 0x0247FC2, 0x0B1F638, 0x07A8DA6, 0x04992AF, 0x1178402, 0x03932F0,
    0x0B853E2, 0x0BD9552, 0x07A179E, 0x037141F, 0x080E948, 0x0AC1DE3, 0x149442E, 0x104EBC5,
    0x19800BE, 0x1F12976, 0x114DE8A, 0x0BEBCA6, 0x1D6134B, 0x0AE5684, 0x0394D79, 0x15CE83C,
    0x1E2D7B1, 0x14CD455, 0x1B5AA15, 0x177CABD, 0x0005626, 0x0416C16, 0x0B635DE, 0x08CA6AC,
    0x1D6C37F, 0x0FB5492, 0x1CC310F, 0x0263C7B, 0x1951F37, 0x1D40215, 0x1E92F1E, 0x16A1F74,
    0x093C33E, 0x0B527C0, 0x10ED3C6, 0x0584C9F, 0x11F6BED, 0x0EEA9A4, 0x0D9A3A9, 0x0A349AF,
    0x029AA59, 0x18E59F6, 0x03B6911, 0x02E026C, 0x00A3F6B, 0x0FA9559, 0x0857A45, 0x1B21A60,
    0x0BB7C1E, 0x03B4E76, 0x052E6C9, 0x1E5F996, 0x16739FB, 0x1F46845, 0x10AFC9A, 0x08B41C7,
    0x10486EE, 0x1EDDEC0, 0x01E077B, 0x13CF384, 0x0A3912D, 0x0EC5969, 0x0A76A2D, 0x0955C0F,
    0x06576DD, 0x1DB2E9C, 0x059E460, 0x00D72EE, 0x0CA5851, 0x12CE91F, 0x182AEDF, 0x08035CA,
    0x074B6D8, 0x08CD677, 0x1C66970, 0x04D478E, 0x05F1DDC, 0x0275166, 0x0AF7B2A, 0x059A0D1,
    0x08BBF8B, 0x04C09AB, 0x11CBDBD, 0x1BAF7BE, 0x0771996, 0x09A2AF7, 0x06F3878, 0x05B4030,
    0x153A334, 0x10EBA0A, 0x1D5992B, 0x133A2F1, 0x1512DE3, 0x1439C66, 0x11C7143, 0x1EB4EA9,
    0x097BD14, 0x143B545, 0x1EEB0DD, 0x1E07A1B, 0x19DB056, 0x1C58C9A, 0x04032F5, 0x07EF89B,
    0x18D66A0, 0x1228CC6, 0x055C64A, 0x1E6152E, 0x0868238, 0x04F6607, 0x1D530CF, 0x041A09C,
    0x1863B97, 0x1C9ADD7, 0x17E2F19, 0x1B5548A, 0x1026F80, 0x104CC33, 0x0B9986F, 0x1AE2821,
    0x08B1FA0, 0x16E296F, 0x006AC8F, 0x1A7262A, 0x1480971, 0x0DEDA7E, 0x0A99636, 0x1428DBB,
    0x1B756E3, 0x10555ED, 0x04CA12D, 0x0B5FCC1, 0x0D873FF, 0x1617724, 0x0C08C94, 0x07425C5,
    0x08CF9F3, 0x1ECF66C, 0x139C6B8, 0x0D6FE09, 0x10017C0, 0x169E60A, 0x1383583, 0x04F8253,
    0x065E85E, 0x0868E63, 0x04A30E0, 0x00A91D5, 0x1160808, 0x19FA757, 0x0A86DF4, 0x18D21B2,
    0x167EF9F, 0x09104E7, 0x067A7D0, 0x0D700C1, 0x06E3F95, 0x19C7BFC, 0x02B94FB, 0x1F2572B,
    0x19C6F06, 0x0CA12D7, 0x16D9940, 0x1DC85F1, 0x0CB4373, 0x18ED131, 0x104B25C, 0x0856027,
    0x13F068D, 0x0151B21, 0x04DC741, 0x1FD971C, 0x12004A2, 0x1388C32, 0x19FEE6F, 0x05F107E,
    0x0E8E81D, 0x1930655, 0x098AF0A, 0x1B1EC08, 0x0CBA71D, 0x1860361, 0x003EDCE, 0x1CCD58D,
    0x01E7FA5, 0x0A29043, 0x05C0D05, 0x13AF0E9, 0x0376662, 0x1C5B33F, 0x085D416, 0x13EB365,
    0x0D86571, 0x144ED99, 0x1DA458E, 0x0871BE7, 0x02965BD, 0x0DB6CA5, 0x0C73E03, 0x1967D8A,
    0x0D0E6C6, 0x15294D2, 0x07C2D60, 0x0FF9235, 0x18E26E3, 0x0F02FC3, 0x0D7884F, 0x1909EF9,
    0x18C5C90, 0x1C471AA, 0x1F5463D, 0x0E4ACF1, 0x0326493, 0x0D36315, 0x1E78AD3, 0x0C9B76B,
    0x0EA2CA2, 0x0C908F3, 0x0554DCB, 0x0FEE012, 0x00573B2, 0x05C78D1, 0x05C4552, 0x02120A4,
    0x195FC25, 0x0298F7C, 0x1E7A195, 0x0430B30, 0x113FEDD, 0x116DDF5, 0x12A718C, 0x09375C5,
    0x1BC9A10, 0x0862B1A, 0x1D1863B, 0x0B2F817, 0x14BEB7E, 0x0CB1115, 0x1691215, 0x1E39F41,
    0x02BCDA0, 0x0AA5AE9, 0x12AF782, 0x188CFB5, 0x17F9FD5, 0x088F059, 0x081F0E0, 0x1D0F054,
    0x1A0A3BF, 0x00E63FA, 0x00A1023, 0x05874A8, 0x078309A, 0x08DAB30, 0x13595A5, 0x0A236B6,
    0x1DB2801, 0x1B2C56F, 0x092B031, 0x10214CF, 0x0CAFF68, 0x1F439A7, 0x050247E, 0x194BB31,
    0x105A738, 0x14DE3D0, 0x0F42B11, 0x0AE812B, 0x058A61C, 0x0CBCD55, 0x051882A, 0x12955A6,
    0x15D95EB, 0x1377149, 0x13B81E5, 0x083CB04, 0x15BFE56, 0x00F4311, 0x16CDA96, 0x172CFB8,
    0x06BDFD9, 0x0F97D40, 0x09E2680, 0x19A08E4, 0x1BBDB8E, 0x1AD6A94, 0x1A02440, 0x176467B,
    0x0E67BB2, 0x0C52D08, 0x1886C7E, 0x1B17187, 0x1DBF858, 0x0022DF9, 0x166A8A7, 0x09C9580,
    0x1627B83, 0x1407FAF, 0x0615393, 0x1CA7003, 0x1131C20, 0x093C887, 0x1261C8C, 0x001C1C2,
    0x1E9E451, 0x0070071, 0x103010F, 0x0E46090, 0x15AD060, 0x1B5694A, 0x14DF061, 0x1F8B873,
    0x010D595, 0x1ECA652, 0x0DA44D4, 0x0DE8420, 0x1EF6C26, 0x0FEFB15, 0x0655051, 0x04FBD26,
    0x0F23525, 0x0FFA8E7, 0x04E837E, 0x031AAB7, 0x1E3FDE7, 0x17150B9, 0x151183C, 0x0D5D5D7,
    0x01EDBEB, 0x0224190, 0x02C9762, 0x069A285, 0x0507CE5, 0x12522DB, 0x14D151A, 0x1F2499F,
    0x0614B63, 0x02DCAB5, 0x04DA022, 0x19C19CB, 0x0BC388F, 0x0384024, 0x12B4A9D, 0x0AFB098,
    0x16F3085, 0x09D27F6, 0x0E9E9F1, 0x045358F, 0x15E04A5, 0x01785CF, 0x1444F55, 0x08EAF01,
    0x07C182E, 0x0888D39, 0x1438F15, 0x02C3267, 0x0A15EF0, 0x087F222, 0x0494EF9, 0x1EFC323,
    0x0EB04D1, 0x0FD58B1, 0x0F7C551, 0x1C9DF5C, 0x0E686DA, 0x0BCA4E9, 0x0BF4C29, 0x130AA90,
    0x182D4FC, 0x035B4FE, 0x0410F9B, 0x0F93FD6, 0x1F319E2, 0x083160F, 0x19368D5, 0x10FEEFC,
    0x0C2A214, 0x1E94C00, 0x1CBA179, 0x19BE5E1, 0x0BBC3B3, 0x14EFF7D, 0x0F809D2, 0x0D6F2BF,
    0x01A5570, 0x1102EE0, 0x1D03709, 0x07EB584, 0x01C2203, 0x01EAFBA, 0x1DA1B52, 0x16BA829,
    0x05B163B, 0x11B18A7, 0x0F9C495, 0x0E64CE8, 0x031DF35, 0x15C2FEC, 0x1C3529B, 0x1C2ADD8,
    0x0F640E7, 0x076A140, 0x0DDF565, 0x1B8E7DB, 0x0121BD4, 0x1F1C46A, 0x106E926, 0x15D120F,
    0x1DB01DA, 0x17B335E, 0x08FDA8F, 0x1CBE584, 0x018E1EE, 0x10DCCE0, 0x1673576, 0x0302F30,
    0x10D2E68, 0x01EBCC0, 0x19CA098, 0x00BA6B2, 0x0DFDC1C, 0x1E99AA2, 0x107CFC2, 0x123B8D8,
    0x033C18E, 0x0F19440, 0x191C78B, 0x079D3C6, 0x0991E65, 0x05ACF40, 0x1B0CE9E, 0x135A4A8,
    0x1FC852D, 0x0C14062, 0x0FB3710, 0x1D95F20, 0x00B68D9, 0x17F2D23, 0x1D625F4, 0x0F41ABA,
    0x047EBAD, 0x165EAF7, 0x14E3B40, 0x1061605, 0x1FCEEC9, 0x1372384, 0x1FDDCDB, 0x1370D44,
    0x1CF64FD, 0x08B754E, 0x1FFE5EA, 0x0AA176D, 0x0832057, 0x1FE3508, 0x027E900, 0x0FFCE27,
    0x1C174AC, 0x124B74B, 0x15B9FBF, 0x1F8FC91, 0x13DF9DE, 0x1A353CF, 0x047DF50, 0x092F482,
    0x115D053, 0x10F4DCF, 0x15A0563, 0x0CDE512, 0x0BD0F94, 0x19040CC, 0x089A3D2, 0x0B5CD24,
    0x0DE0D69, 0x17BBCAE, 0x0B95B5E, 0x158CA79, 0x06FDD31, 0x0E00AF4, 0x0A3DB52, 0x0FE8BF6,
    0x1CE9F1A, 0x1FB0014, 0x020744C, 0x1790551, 0x0F5EFEE, 0x08B0BFA, 0x1A9C746, 0x0E60FA4,
    0x0DBC631, 0x0B804A6, 0x1E39B3A, 0x1AE2530, 0x14BA211, 0x11063AD, 0x154DA95, 0x134B8C0,
    0x044B3FB, 0x1B5679F, 0x01C4931, 0x1847CA2, 0x132BB2F, 0x0B29367, 0x1FEE63D, 0x1560F7D,
    0x0B934C3, 0x0EE2C9B, 0x0100D3A, 0x18ADF01, 0x0C41E86, 0x0293912, 0x178B4EB, 0x1BC8417,
    0x0A6CEF1, 0x11C844D, 0x049543D, 0x141C8B9, 0x1F10BC4, 0x1C613DC, 0x1FD6E97, 0x0E975A7,
    0x107B2D0, 0x1C9829D, 0x1C4C535, 0x0AAE7BD, 0x1BB2668, 0x02BE392, 0x16F6BF2, 0x17F5E7C,
    0x0148AD7, 0x13958E0, 0x0184ED5, 0x06724C7, 0x0E1B6CE, 0x07A1F62, 0x1577723, 0x0125CA9,
    0x12E745F, 0x14C365D, 0x1292D4D, 0x170B744, 0x179F05F, 0x076EAAF, 0x011DF52, 0x1C34EB5,
    0x0E044D2, 0x08EF28C, 0x19602C8, 0x1CAF472, 0x0222BB6, 0x17C0DF4, 0x0EDFB8E, 0x06105A6,
    0x01E2E4D, 0x15BBC7A, 0x0870EB3, 0x0F98951, 0x1FFCDF0, 0x073B439, 0x1CED1D5, 0x1F0FB17,
    0x0EA2DCE, 0x11A9548, 0x01EC8A1, 0x138CBBA, 0x07EC0C0, 0x1D0F7D8, 0x051DC3F, 0x0AA83BE,
    0x0A2481F, 0x0D55669, 0x020CB00, 0x04D5998, 0x1F894BF, 0x036FF20, 0x19C4BA2, 0x0EE6D28,
    0x1CE3A07, 0x1C7D278, 0x1DCB6D3, 0x1B2F2E4, 0x17BC84D, 0x15BE7BE, 0x1A97B6C, 0x0353696,
    0x1FABC60, 0x04DC5BD, 0x0F1184E, 0x1EFF5AC, 0x180150D, 0x1A25F88, 0x11D98C5, 0x1B610B4,
    0x1066353, 0x1417131, 0x0E3FA3E, 0x16B38EC, 0x09DF58F, 0x08397EA, 0x038BD14, 0x0217174,
    0x19336EB, 0x0AC434A, 0x1701220, 0x05487DA, 0x08DE691, 0x069FBA5, 0x10563E8, 0x1C349D3,
    0x0AEB910, 0x17AA835, 0x0552241, 0x154CABB, 0x004897B, 0x18878F2, 0x09B3E0A, 0x06274A6,
    0x04AF1CD, 0x0C2282B, 0x1AAD88D, 0x1412A94, 0x1A70E59, 0x02C7B4D, 0x0F72404, 0x0726D0F,
    0x1B5E703, 0x0716664, 0x0A187D1, 0x065E9EC, 0x0DA43F9, 0x16F8972, 0x1AE7F5C, 0x09BD349,
    0x189FB45, 0x0B887F4, 0x0BC2AA1, 0x0E13AC7, 0x1EF9E5F, 0x1880079, 0x0C43298, 0x079A80D,
    0x094E81C, 0x11862FA, 0x05EB1A8, 0x0F77DB6, 0x0FBF4D9, 0x0558FAF, 0x154219D, 0x02F46AC,
    0x19C7797, 0x19745E5, 0x0356CA1, 0x0B0D675, 0x1EB61F3, 0x0939CF7, 0x1699488, 0x1D7C69A,
    0x0190A35, 0x0439480, 0x1EAE90F, 0x1F4061B, 0x00FC732, 0x154554B, 0x0F5A6E3, 0x08DAD63,
    0x12ACE24, 0x0665DD0, 0x10AA03D, 0x19894CE, 0x0DE57E5, 0x150797F, 0x135E586, 0x1BDF814,
    0x0512BAC, 0x0FB164C, 0x088E44A, 0x0ADB517, 0x12F5352, 0x0E827F0, 0x1B02ED9, 0x11D4E41,
    0x131102E, 0x03AC1C9, 0x121D09A, 0x1C4EC0C, 0x0D11901, 0x1BBBA1D, 0x1054C19, 0x0F22842,
    0x02D2CBF, 0x0E27DE4, 0x019B4E2, 0x1B061E3, 0x1A3C958, 0x0A29704, 0x0018676, 0x1912546,
    0x099694B, 0x06A028A, 0x11A76A6, 0x0CECCED, 0x15F0D06, 0x1CBEA8C, 0x169874F, 0x1499BEA,
    0x1D85006, 0x099415C, 0x0F248FB, 0x1F6682B, 0x0FAD2D0, 0x01B4B54, 0x1D2536C, 0x1839262,
    0x1DBE550, 0x1C5038E, 0x124652A, 0x1122622, 0x19EAD79, 0x0A2DE37, 0x1107B8B, 0x1312A0A,
    0x0DDC155, 0x081D449, 0x186251F, 0x126BF72, 0x1C02159, 0x1F5A616, 0x1401C18, 0x033F77A,
    0x129C3AB, 0x0C860CD, 0x0F08854, 0x1766295, 0x105BE96, 0x0B75528, 0x1C46685, 0x045C683,
    0x1DC33AC, 0x0B48820, 0x059E8A3, 0x1E17227, 0x1C794FB, 0x0AA5C7A, 0x18C812E, 0x0BC08C5,
    0x0750BD8, 0x01B7979, 0x1BC23B4, 0x0ECF0A8, 0x14F1EC0, 0x16CD423, 0x08682FF, 0x12734A3,
    0x061EC42, 0x0230A28, 0x12CB82F, 0x1D6EDBA, 0x0FF05BB, 0x13606DE, 0x0EF42F6, 0x0A0B90E,
    0x09726A5, 0x0D23B80, 0x09FAC28, 0x0076B09, 0x13D5E8F, 0x1D1C1C4, 0x0C93B78, 0x1D68F0B,
    0x0264137, 0x06D5DA9, 0x1C9EA59, 0x08D5126, 0x04A0375, 0x09BD596, 0x022278D, 0x0DF8D37,
    0x0116A12, 0x06342E8, 0x021AEE3, 0x0BDDD7D, 0x071F3A9, 0x1DED5E3, 0x0EFF1E1, 0x0F3D3C1,
];

#[rustfmt::skip]
pub static CODEBOOK_6X6: [u64; CODEBOOK_N] = [
    0xFC9D51704, 0x31F7529D0, 0xA6FD042EA, 0x9CA1391DA, 0xC1DE4C395, 0x4D0F8988E,
    0x8C1BC2DED, 0x8F6B7660A, 0x6E1E2CBB2, 0xBBCC2920E, 0xAE2459257, 0x0D558F101,
    0xE544518E1, 0xE405B619B, 0x17AA125B2, 0x63DB9AA0D, 0xEF6F49E30, 0xE3D9EC142,
    0x79EB31CF3, 0x2E0107F1E, 0x3B617C1EC, 0xBA795382D, 0xCA6686D7E, 0x562C8ADD8,
    0x0CB1E8E09, 0xF638BE4C5, 0x50F0B3A58, 0x712452735, 0xB1CBC702E, 0x7CE35576F,
    0xB2421895C, 0xF30565FA4, 0xD2DFAF934, 0x98F1CB7EE, 0xA9104BC1B, 0xCB9258670,
    0x9D8E14C61, 0x8743D4905, 0x76F0C4BAF, 0x2619604B8, 0x657F94235, 0xFBA14E380,
    0xFB03BDD4D, 0x9882A6F46, 0x8DD1342DD, 0x6B279EB27, 0x378753B22, 0x9DFC67E05,
    0x043A29C92, 0xDE23984B0, 0x71A0B44B9, 0xD36FDB345, 0x3A9473FD2, 0x4AB0C28E1,
    0xB9133A9F6, 0x5DB53FF82, 0x38CEAFCE5, 0xE30F0F713, 0x1A945D527, 0xA761B513E,
    0xDBEB46A53, 0xC954E1310, 0x008895B2C, 0x9E4405D4D, 0x6050E9DDE, 0x5AEFA02D8,
    0x9D2AFA571, 0x39879C892, 0x41D522AA8, 0x52418D0BF, 0x6CA7E031F, 0x68B6AA590,
    0x533B7F5A9, 0x7199AAEC2, 0xB53176E89, 0x2A4630694, 0xFE8EC790F, 0x21B0D88BE,
    0xE18B664DB, 0x14E3400A6, 0xB3A6EB918, 0x2D17F6467, 0x175A56255, 0x1FE2F3B3F,
    0xCCC7E26F3, 0xCD1AD1B73, 0x751F610E4, 0x9B60ABCDC, 0x28F15D883, 0xB4EF06591,
    0x8A3F03BE2, 0xA85E506EF, 0x5CD2A7187, 0xD796BA7B4, 0xD515E4A23, 0xE99CD7148,
    0x5E7D3B541, 0xF2E33FEA5, 0x751493608, 0x9CB4962AB, 0x33F020FF1, 0x267CDF3F2,
    0xB50485876, 0x24064B4D1, 0x4D3342E9F, 0xC819FF651, 0xE1ED19098, 0x32BFBDFB8,
    0xA3BEE5BF6, 0x465BC5356, 0x7C0B4E584, 0x11C49E50D, 0x741C4A861, 0xF9D2724C8,
    0xAA3A56F26, 0xF4CAE5CA8, 0xEACDDFF66, 0x40E5B0483, 0xC177D2495, 0x54DE5BE66,
    0xE6591D849, 0x440FE79C0, 0x5A923F669, 0x3FCD74075, 0x32FEAEA5E, 0xB3E417DD5,
    0x644BFFF34, 0xD09601D43, 0xBA0B91702, 0xAA6C679DA, 0xB60A32163, 0xEE3B21C1F,
    0x8B6A5FFCD, 0x81A450EF8, 0xDFBC2F5B8, 0xC8E3857BC, 0x167401AA1, 0xF18D49167,
    0x42449B7E8, 0xB0A99A43C, 0xACBE62946, 0x6BEE81941, 0x97D6810AE, 0x00B1EF506,
    0x276588218, 0x429B459BA, 0x0959C1047, 0x1D5C344BB, 0x8E721C3D6, 0x5DCBFB4AF,
    0xC2B6BB07C, 0x3D5811937, 0x805D76766, 0xDEC729A89, 0x2C35220D9, 0x23A68E340,
    0x342E8069C, 0x52D9514E5, 0xD18BC0A09, 0xD2E2363DC, 0x94BA96895, 0x89100DAB5,
    0x887D41E54, 0x40BBB0867, 0xA2249C5EE, 0x026E9D71E, 0x3CC6B8D7F, 0x385123322,
    0xF9BAB9BD4, 0x2F745CD7D, 0x144737261, 0x567F5969B, 0xD376F7E76, 0xF5FAF8C43,
    0x835C7947B, 0xF45431158, 0xC802D5046, 0x99CD903E5, 0xD401711AC, 0x3EA84DB7C,
    0xA121019FA, 0x54DEE0D91, 0xDFEC9E819, 0x8BA0519B7, 0x2FC28E8D7, 0xF6AE6C955,
    0x510523447, 0x9AD15FC98, 0xC357CCAEC, 0x87D0E5671, 0x6A9609887, 0x7DE5A08E0,
    0xE04B154EC, 0x322B2B8C4, 0xECB017D44, 0xE43277397, 0xA849C962D, 0xF632C2206,
    0x482AB7B85, 0x2934F318F, 0x4693EB45F, 0x9660B9D67, 0xBE72A19CE, 0x89E79EE5F,
    0x0565ABCB0, 0xB36D0CD16, 0x4161E1F36, 0x3826D936A, 0xF7F50A48B, 0x511456162,
    0xC980E4E80, 0xFC23EE2A3, 0xDA4B7EE39, 0xA558D71EF, 0x9EDC36B42, 0x3315FA212,
    0xD756881C1, 0x959A1BB09, 0x127E72C53, 0x4FC4A3537, 0x642AFD0CA, 0x38F98F09E,
    0xA4D53A060, 0x0BC826F39, 0xFE7143F53, 0x03F26BD7E, 0x22A9253C9, 0x6324CFD4B,
    0xC1A9C33AF, 0x98FB30012, 0x9BB6F6092, 0x6462F65ED, 0xF3DA88CF5, 0xB82746CE1,
    0x40B66A2BF, 0x77DC55E82, 0xF37A61B83, 0xD3C342D6A, 0xA8F2ECDF9, 0xEBF44EE29,
    0x8F84DA0E8, 0x463D48373, 0x4F82F628D, 0x19AC0093D, 0x407F57D7F, 0x2C1D7A00E,
    0xD91BE7D9F, 0x920320B13, 0xED06485AD, 0x6D4372515, 0x000FC4C0F, 0xFE5DBACE9,
    0xE2F8309F2, 0x5BD79187C, 0x5C4C7E005, 0xE7ABE741C, 0x162EE34F0, 0xFDCFE4295,
    0x086043D8C, 0x0C0BB46C2, 0x103A61299, 0xC4E1AAAE7, 0xD5E434B51, 0x1898030F2,
    0x2E2209124, 0xE94783DD5, 0xCAA7BFDD0, 0x5B0BA0196, 0x10F338F85, 0x1E62856B7,
    0xAC9CCB039, 0x67C189C3D, 0x725F70A7A, 0x84FCCAD26, 0x6C8475651, 0x7E4C65300,
    0x48E6DCD87, 0x7033D16D4, 0x8B0982BA8, 0x82349A932, 0x626DC2F9B, 0x1140C60ED,
    0x208E05131, 0x7624237BE, 0x15F02A0BA, 0x4753E38A0, 0x8668E6EEC, 0x0418F9BB4,
    0x72FA4AFC9, 0x7B602EF97, 0xF717F6459, 0x79082C4ED, 0x9119073A4, 0x253B950C4,
    0x8BFF62C79, 0x3D40BD419, 0x36043B114, 0xA36EB3192, 0x58811685C, 0x2FFE4A202,
    0x1F1B3BCE0, 0x6E4D38B6B, 0x0475FFF9D, 0xFB81A3493, 0x204ADA48C, 0xD70CE7D11,
    0xAF9C60F3B, 0x44E91460F, 0x8EDFC8F50, 0xB57AAC969, 0x7FA66EB36, 0x287E90B1D,
    0x13991BD79, 0xCF0AC73B5, 0x838FFDE01, 0x2EDC8F936, 0x24C9798C6, 0x06235B11A,
    0xFB34A1FB7, 0x87F09FF2F, 0x094A089EB, 0x787A9446E, 0x0CE772645, 0xC5B55D8A5,
    0xF49B9CE78, 0xB3DC4FBE0, 0x5112D91EF, 0x46B65EFF7, 0x80466BF55, 0xE5BCD6E74,
    0xDE2E45FF4, 0xEA1A9957D, 0x307C76178, 0x658B04FC3, 0xEB02DDA83, 0xA323B36F8,
    0x39F34CCB4, 0x1D48FCB12, 0xE935659D9, 0xD5D4A5F3A, 0x4AEB03E1E, 0xA8FAD9F9E,
    0x5C334BA02, 0x77B2DE02F, 0xBECDE775A, 0xFD7B47A4E, 0x1289FB2D1, 0xD3293A49F,
    0x33CAD8852, 0x2B5A3D63C, 0x4B2BACA28, 0x9A6764729, 0x985F5BD06, 0xBF5584829,
    0x41BFA3149, 0xE08069EE2, 0x0B00DF9C6, 0xA71A25901, 0x4AC2ABEAD, 0x58A6C7565,
    0xAA6377A15, 0xD94E5F2AC, 0xF71552AD3, 0x5CCE4D196, 0x3B8BE48B1, 0xBD97A5AEE,
    0x40293BB0A, 0xDFD57251E, 0x2F1447805, 0x668BC2AF4, 0x448BC8144, 0x61CD3B437,
    0x0E1A38301, 0xA79ECBEE9, 0x16A2000D8, 0xB41DDBCB0, 0x67E2652A2, 0x4EB42510C,
    0x87DFBC991, 0xFC1439EF0, 0xC239AB0A9, 0x08F499D18, 0x45C149B03, 0xA708C2964,
    0x63EC9621C, 0xA04795D5A, 0xD68FE882F, 0x8ECA79C27, 0xCA75C2EB0, 0x0DC10233F,
    0x30540EA95, 0x133C0445F, 0x87197B174, 0x88764F87D, 0x9023FCA71, 0xA517C3153,
    0x34C4C559B, 0xB9FE23127, 0x9DB8C23C2, 0xCBE51DB42, 0x217D78A87, 0x924756432,
    0xFB88A9DBC, 0xCD849327E, 0xC6BF06C5C, 0xF267A713B, 0xD38FB8DF9, 0x90FDBB96A,
    0x4137AAE23, 0x3CB8B773F, 0x8031114E7, 0xC6964EA11, 0x776F6BC4D, 0x79FD11ACC,
    0x4943AE76D, 0x75BEDB778, 0xB2E432F2C, 0x737CA7DB9, 0x1EC1E2364, 0xDF8CAA45C,
    0x5A8F8EAA3, 0x89A71C0A8, 0xDA851904E, 0xFFA27902C, 0x4E3C14807, 0x624F2D765,
    0x8C4B684D7, 0x5FF7D7B03, 0x04B1BB28F, 0x8843CD1A3, 0x80B6E4048, 0xD3BB8054F,
    0xDD600BD12, 0x6B62D54C9, 0xD4EE0E9E2, 0xABFCF0756, 0x10E6818F2, 0x6625C5A13,
    0x05A36F355, 0xCA6A04AB0, 0x3AFA38B6F, 0x9F3C5909A, 0x509E1ADA5, 0x35912F64B,
    0x57A7BCCA4, 0x36699C066, 0x9AD3F5906, 0xF252B4B77, 0xFFAB766C7, 0xFDC13C3A7,
    0xFAC95035E, 0xF906AF871, 0x1494259F0, 0xF94A91EBE, 0x2BC7774BC, 0x4C4731F5F,
    0xB1C623C4E, 0x1E5623018, 0x19F8C12AC, 0x0AD40C4B0, 0x99E1B4557, 0xBF980C91F,
    0xD7C072E40, 0xCC2FA4CFD, 0x59C558C3E, 0x8483B9B39, 0xBE9C464EB, 0x15E42771F,
    0x16CB4C1CB, 0xA9A3FB3CE, 0xD03739287, 0xB1144F8EF, 0xEB5771060, 0x4EDBB090C,
    0xEF7C2D385, 0x240915BB3, 0x292FA1E88, 0xCB50F385A, 0x494A4AE56, 0x9CDEBA48D,
    0xF17D8ECA5, 0x6B215684A, 0xC0440C992, 0xDF3F0EF8B, 0x3759B2FEC, 0x15D9C7230,
    0x201B29107, 0x65A992D2F, 0xE12B18B6D, 0xE4B3008C4, 0xABA7C08A2, 0x1DD394C37,
    0x57A2AD557, 0x1777C3FF4, 0x5A3EC7A1B, 0x0A2705CBA, 0x396E20FFF, 0xE62FE23EB,
    0xE7C07EC9D, 0x9A7A3CE44, 0x5236DCADD, 0x4CA243483, 0xE22E01377, 0xE933880F3,
    0x04B9545A9, 0xEAD4690FE, 0x2F71BD5D5, 0x3C6F16A02, 0x0B66F5FD2, 0x10BF53024,
    0x012BC6D75, 0xD38E8E68D, 0x60DF5F59C, 0x4A42221A8, 0x4D72BDB22, 0x8E05CEFF8,
    0x9E878B03C, 0x81F1F00CE, 0x5F5CE70AC, 0x232DD3F00, 0x7F91DEE62, 0x8596025FD,
    0x6900A99A3, 0x641CD4CC6, 0xCD5F23E83, 0x716ABA6F5, 0x395EF8A4E, 0xF13FD6EFB,
    0x38D5FCC66, 0xA361186BE, 0xF144EE6CA, 0xFEE474581, 0x4ED0FE52A, 0x9388B270B,
    0x478CB2B32, 0x21248D4F5, 0x794A830C3, 0x53EE682E4, 0x1ABAF7AE8, 0xDEB4FD209,
    0x52139B9F0, 0x2643A6004, 0x3E9B6AE3E, 0x9781B1450, 0x18B5A0C5A, 0x0E0C4C636,
    0x84A8D7082, 0x85EEB2D42, 0xCFB81C367, 0x84714B8E1, 0xC64D6BFAD, 0x8D072B61E,
    0x2893C6BD6, 0x19565D180, 0x9F0F2C533, 0xD09486ADE, 0xDB1821F0D, 0xAAD7CD289,
    0x7D9DCE34E, 0x9A0F8BF5D, 0xBD356447A, 0xDE36370E1, 0x44EE1229A, 0x296AB62AA,
    0x334F8C0DC, 0x52D01E052, 0x84FC7A198, 0xAE3978845, 0x5CAC810F5, 0x8BD53A1C6,
    0x9B91565F7, 0x28124F770, 0x56BB0F79C, 0x66F12306F, 0x4DAEF5AB6, 0x93D1ECFFD,
    0xAB80D3320, 0xC3D5A64C1, 0xE57ABA68E, 0x02AFA50A7, 0x95F6DEEB2, 0x1DE2E9203,
    0x41C5CF17F, 0x0BA3B0D4B, 0x86C1F87CF, 0x19796DAC9, 0x63F56C75B, 0x11B916B8F,
    0xD0028A3C4, 0x0E536D2AC, 0x9BC9371F0, 0x3178FE98A, 0x0F634E5C7, 0xD61FEB638,
    0x5AC9E448B, 0x74E907BE7, 0x73DE79F05, 0x6EC9CD248, 0x363F45A2E, 0xF1A23DF36,
    0xBB42AD786, 0x2694C6E3E, 0xFAF124C24, 0x8038CD36E, 0xA9A1DBC62, 0x4E32E12D2,
    0x237AD375F, 0xB1E8C21B1, 0xD341117F2, 0xE835E3063, 0x7DF22C3D5, 0x4648391CC,
    0x796AE5326, 0x58B38C5B7, 0x79808B6E8, 0x2E00C41CA, 0xBE2F88903, 0xD968F1D54,
    0xBE511466E, 0xCBB7642EB, 0x366EF7B91, 0xA7D7ED1BA, 0x0A7E8DA61, 0xDAF651B3A,
    0x04EE77A0C, 0x0C9536A33, 0xE73482AEA, 0xFBC04CBCF, 0xD770D1CB1, 0xEE40430A4,
    0x8C9BA3271, 0xECCE63A6D, 0x254DFE811, 0xC347445F1, 0xA27F2FD82, 0xBAC599573,
    0x1DABE836E, 0xEC204A674, 0xA1236ABA4, 0x8ACBB8AC0, 0x1C04B6CE4, 0xCBB122658,
    0x21E74EB9B, 0xDDA5ABE19, 0x6A639F87C, 0x5D6932E16, 0x6018A3480, 0xC27D7F036,
    0x755989162, 0x1F5152000, 0x909370AB6, 0xD926CC662, 0x0F2D1D3D4, 0xEE96B5362,
    0xC0CCCB0B4, 0xD9835BC84, 0x937541849, 0xE2C17E96C, 0x5B73376EE, 0x41A803F59,
    0x8302C19C9, 0x63FB59AB2, 0xF3FEF2164, 0xE49AC27C8, 0x62150BED8, 0xD0D1C678D,
    0x88EB5606D, 0x680DBD180, 0x2F822F58D, 0xA2A20EC10, 0xCAA50C583, 0x274645DB2,
    0x82E714A7C, 0xD62A6D401, 0x6EA6EDC6E, 0x189B31A5F, 0x33A147E03, 0x2FF3F5A7A,
    0x93F4A7188, 0xE5901A3EC, 0xAD056A7E2, 0x89FE8F5D0, 0x6471A8479, 0x313FC31AA,
    0xCBBBD3055, 0x063BDBEC2, 0xE34CEA569, 0x35AFF717E, 0xB6172E1D5, 0xD7084F2DB,
    0xD45980450, 0x34A1774CC, 0x6D9474A28, 0x46C6A77D1, 0xAC0B4BA18, 0xDEDFE1456,
    0x8BE1EDD3A, 0xBCDAEB492, 0xC39FA57BD, 0xD67B3C873, 0x902949102, 0x3129B4AE3,
    0xDFA75947B, 0xA90A01E5D, 0x2B893976F, 0xD68352A1F, 0xB3D4D4B1E, 0x499E6C48C,
    0xF028E66F0, 0xE38D77545, 0x281DCD7EB, 0x2776ACCBB, 0xB67B537E9, 0x6D3CF8ED8,
    0xA325AB626, 0xB4A085DFD, 0xE8FB5FD25, 0xA4DE79AD1, 0x578C8EBFF, 0xDFF1CE6A7,
    0xFB2EE04E1, 0x654F5298F, 0x86B32FAE8, 0x701FFFC85, 0x425AFA2B1, 0xFEEA71722,
    0x937B9C0A1, 0xE1133314C, 0xEA2269743, 0x29CAB3DDC, 0xFC50F2021, 0x6D236E87F,
    0x7AEB45865, 0x45EB17776, 0x8D95DD314, 0x5EE6BBD68, 0xFB1918189, 0x800E7872A,
    0xFFF0B495A, 0x5B366517A, 0x865FD59AE, 0xB5C4E693D, 0x0DCB45BDF, 0xD549DA39C,
    0xD7F834E2B, 0xEEB14D43A, 0x97BF214A9, 0xEA38BCEB6, 0x3472ADFA4, 0x0C25796FE,
    0xCD2CF4D0B, 0x34CE1EED0, 0x1659B8D8B, 0x64FE206A5, 0x1BA125879, 0x4BD4587C9,
    0x4E0982022, 0x695B4DF93, 0xE0918182B, 0xCD9DB0022, 0x3D957F431, 0x3E4301AF8,
    0xBC11DE6D2, 0x0979FE346, 0x73CB4D4BD, 0x6238F72C7, 0x9FB34AC2A, 0x2D2925426,
    0x8FDE9BB14, 0xB62C9E9F1, 0x33F5E7BB5, 0x5B20A465D, 0xBA62EC852, 0xD490C7FA2,
    0xA34EDC448, 0x396EF3B65, 0xDAFBDAD32, 0x1F9DA4CBE, 0xA961154D8, 0x6FEE3AD12,
    0x8B26E178C, 0x574AB5E31, 0xFAD97C4D4, 0x18790096F, 0x5D3B67B11, 0x9E6C8977C,
    0x52FE736B0, 0xECBAF43EF, 0x471B194CA, 0x30D8D6CB6, 0x53EAD6BB8, 0xB7C3BEDAE,
    0xDD7936F48, 0x4D11370FA, 0x6944C7189, 0x5CDF2D1E9, 0x6F9E5459B, 0x671F4E4AD,
    0xE7C82591E, 0xAD11F45AE, 0x06FAE0069, 0x73584F2CC, 0xFB945EB7B, 0x88D32E64A,
    0x4EDABFC6F, 0xB63641A5D, 0xB60A74AD9, 0x8CC00BBFD, 0x3F629EE8D, 0x145C33B5F,
    0xE218911A2, 0x76688F7D7, 0xC96484EE9, 0xE77765D16, 0x8784D4391, 0x4C6696BB7,
    0x5FD5C2D30, 0x6E8EB39E6, 0x39BCD4DF3, 0x67C6E0BB4, 0x56538386E, 0x0D78A07E4,
    0x92E33C92A, 0x5C738FE7F, 0x0BEEB4B21, 0x5F52C59D5, 0xF861F117F, 0x33F66ED85,
    0x5BF80D257, 0x4EC302FD5, 0x412EADC5A, 0x55AD5DDD7, 0xC70229C83, 0xD8AA1209F,
    0x86438AAAB, 0x43E8A56AD, 0x306148216, 0xFBAEBAE7D, 0xA71887055, 0x9D02C7606,
    0xA6DBB907D, 0x1AE308833, 0x350F9BDE2, 0xAB5FB4269, 0x30F2E2B53, 0x3F3769014,
    0xC96FB71A8, 0x207F49EE2, 0xCDDB0B49D, 0x5104D4F3E, 0x3755817BB, 0x1CB8897B9,
    0xD8208B158, 0xE1BF15843, 0x81CB4B059, 0xB754A2596, 0x8710752B8, 0x4854FDAD0,
    0xED367B145, 0x14CD7ED59, 0x3F5937A38, 0x37DF463E6, 0x6416152A6, 0x306C96043,
    0x218185A81, 0x41060ED0A, 0x92CF8BC42, 0xC9C396566, 0xB96E82150, 0x73C1FB4C0,
    0xAD805EF49, 0x286C35718, 0x23CF1CE64, 0x7156CB376, 0xBDC109047, 0x75B501BAD,
    0xBFF199D0E, 0x687130938, 0x1706CD525, 0x8B0260E6B, 0x905727C00, 0x93B579CC5,
    0x632ACE63E, 0x66FC80D89, 0x8237824BE, 0xBF7BF0662, 0x2D4DC4B21, 0xF9CD35B08,
    0xA0B47DF7C, 0xA259AC2DE, 0x0238B5D23, 0xFBF540BA4, 0x8840D3352, 0xDE66F8138,
    0x308FA0D64, 0x787A7C051, 0xCE3626390, 0x8B1063317, 0x7374E646E, 0xC256CC499,
    0x40194A238, 0x52A4CC24E, 0x6A125A6FB, 0xB8010AECA, 0xDDC4B0645, 0x9714ABE64,
    0x608058095, 0x73C67E85F, 0x1A60E52F8, 0xC319F0AE5, 0x21DD29B23, 0xADA91732E,
    0xE418ACF6F, 0x2F12388D2, 0x1C41B556C, 0x1F2384C86, 0x9B1DCA58E, 0x957E15E7F,
    0xD1E34407E, 0x850F29191, 0x25F8EDC65, 0xB776EDDF0, 0x5495FBB5E, 0xB29FF4225,
    0x5281D0BA9, 0x1680C1775, 0x60D4B1AE9, 0x3AAF7EA53, 0x4FD4B4F66, 0xC22094620,
    0x9F1B85818, 0xC15E24B6C, 0xB6A2E2C2F, 0x1CFD46B64, 0x0C8F1D041, 0xFEE4A66E8,
    0x4D380ACCB, 0x23EAF97BC, 0xD6E5C3982, 0xE140833E2, 0xB78FA81CD, 0x9B775F3FC,
    0xB18DED540, 0x41FEDD3D8, 0xB96DB5CB4, 0x60EF8E8B7, 0x07DDD11CA, 0xE714D1569,
    0x20F277602, 0x20A65167E, 0x0532E0E74, 0xD894683D1, 0x15E8AF191, 0x9AE5451B8,
    0xA7CAA9414, 0x4937D0609, 0xB603D8FF9, 0x2DA2BA867, 0x7AE35BA2A, 0x780D058C2,
    0x6814734CA, 0xBFE466345, 0xA5D007542, 0x5DC21B189, 0x403C5EDBC, 0xE2B07B887,
    0x2DAD31E7B, 0x07E5D9451, 0x5442A491B, 0xC31FB8E6E, 0xB12EB6509, 0x57CE3C47E,
    0x9C4C3EE7E, 0xFC9D9E2B0, 0xDC48B8486, 0xE29928D17, 0x82257247C, 0xF0A594ED9,
    0x0F1D6E2C1, 0xDFC489B21, 0xBE1CF1415, 0x787EAF5C8, 0xC48D87C6A, 0x977E170A8,
    0x41E3F3B44, 0xD4FBC51C3, 0xB19F9C162, 0xA7CFE1A22, 0x6CC365BC8, 0x2169EF9F8,
    0x7631508FA, 0xE7370ED30, 0xC493B7FEC, 0xB503F3126, 0x0575B9333, 0xE92D6BE0E,
    0x11485F8E3, 0xEC21D5CB5, 0x1CFC0EF92, 0x516DFD0A4,
];

#[rustfmt::skip]
pub static CODEBOOK_7X7: [u64; CODEBOOK_N] = [
    0x0994AB9C6DAD4, 0x1E71BE42303B5, 0x187E52C24F537, 0x0E5869EB99DD8, 0x1DA39EFC240AA,
    0x18FBEB15C0091, 0x06C0755D73F00, 0x0B366AD1D6202, 0x01F147CCB0D74, 0x1668CFEDED012,
    0x107AE19A9DA8F, 0x114078583E6CA, 0x0A13F38896079, 0x049F871170BB2, 0x0F73C07E3D5C4,
    0x11CFA71BA6D85, 0x11EE91F666EE6, 0x002DBCDA758E3, 0x149474C37DE7C, 0x130809979E036,
    0x0726418931DAA, 0x021ECEDC053B7, 0x00CC7F43B402E, 0x1426F56064560, 0x0756E32D47509,
    0x121EBD5BD97C2, 0x1CF2B83764306, 0x162B283F01469, 0x1D23ED8AC7DF4, 0x04842AFB7749A,
    0x00A5631697C4D, 0x08DBE52466B75, 0x1EE9DC53E556B, 0x18C4F5B945D17, 0x1CC9D98826193,
    0x1554B5C3EA9C6, 0x02E221B590E1E, 0x18772B2A54B41, 0x1B606FFF1EE50, 0x0C6B7A0682FBF,
    0x0A42CFC277A04, 0x0CE9C0A7FF3F8, 0x14DCA18D34C66, 0x1B8B3A0EF69C2, 0x008B186A0F9FD,
    0x15066D3FF1A28, 0x08490E46BB65C, 0x0650D0BAF597B, 0x12909ED282AD2, 0x1ED276EDAFACC,
    0x136943905B990, 0x0DA2BAD25EAEF, 0x14500047D4FBF, 0x0FE0B7B4A6D62, 0x1687D5EE0F053,
    0x117D62CD2C411, 0x0EF345ECC37A7, 0x05998FE21C68A, 0x029C2E08446EA, 0x0DBF0384DCC2B,
    0x0652BE0EE1CA1, 0x005D4A116515D, 0x14D7599F80FAC, 0x1E99F0643A56C, 0x1D785B5DE37F2,
    0x0EF62C0978A76, 0x04ECCCB071B8F, 0x0B93E4DA49C00, 0x0C34A15937F1D, 0x1B1007AA7DE2F,
    0x1C4EDC3FAF0E5, 0x044A824B30D13, 0x05B2C11B45775, 0x1A03122449835, 0x1391E747319E9,
    0x17EC0978C3D60, 0x110320F125164, 0x0D5B43CA78320, 0x0AC2690615FAA, 0x104E6B9AC2710,
    0x0946F706FA6F2, 0x1E2F9EE56B5F8, 0x09C65E8C95411, 0x00E58155A6DAA, 0x0F203892D1064,
    0x045D8E8DCE71B, 0x0B5B515676C5B, 0x195B41ADF318E, 0x04DC9365FB840, 0x1E2F92CB25E9D,
    0x0E1CF635D18B6, 0x15FA32214698B, 0x10857109AE73B, 0x100B66A0F770B, 0x1288475675956,
    0x04AF064B8242C, 0x033B2E131DC3E, 0x12AAE31E736AC, 0x19E5BA6A2CA7D, 0x05B13A328F731,
    0x03CF13A319BB3, 0x17BCA41FAB8FB, 0x0DC41FB16B752, 0x1A39EE9B2AE2D, 0x1E9E44EBFE9A0,
    0x19852FA5F51B2, 0x059A56D8E0C1A, 0x1E7C249C3F38C, 0x1EA6603658755, 0x16B0F7D0DF343,
    0x1680A223501A7, 0x1B9246317EADA, 0x0A284EF9114C5, 0x0C16F96AD6D9B, 0x00AE2CCDCDDAE,
    0x148BAF9D7D8F9, 0x0558B421F6490, 0x01C0689B9877F, 0x0D9EE32BB3383, 0x010EBA61E3C2B,
    0x1B51937F2CA80, 0x0853B9DCCD983, 0x11BFFE7D18918, 0x0DA675AE9FA6E, 0x0C999BDEFC359,
    0x1A80988762D71, 0x0961388427EEC, 0x177581A0BA408, 0x1EE302783F432, 0x1E31BEBCCECCB,
    0x158FA08352613, 0x0A3CEAC686D21, 0x06E45B5A9B6F9, 0x0C5066E2886C5, 0x068BF50A2CE8C,
    0x146B0D4D24B3C, 0x07D58451C8007, 0x16FA815D8FED4, 0x09C850607F0E4, 0x1E26280E4E4BA,
    0x1B7FE8B5EF42A, 0x092FB94274214, 0x0439B4F6BFF82, 0x133F1EEB00A74, 0x09BD81EAAD372,
    0x0E8089102C9BD, 0x058FD0ACFB528, 0x1EF6425C0C9A1, 0x1D479ED9A8305, 0x0323F1D5F8C33,
    0x10996D077AEBF, 0x021E8194FD85E, 0x1B3C07D587696, 0x071F38F917FC0, 0x0257CB9B5852D,
    0x104BFF87542F7, 0x062AAD046050B, 0x0BB74DA55D975, 0x0AC8947FF56C0, 0x1EA1CAB3E8051,
    0x125681EF41027, 0x153CF05623D9C, 0x021E691F30091, 0x1AEFA06532B03, 0x0CE786B79AC0F,
    0x15CB95E4C8573, 0x0396003D0BCDE, 0x144329E758F0A, 0x0C7152992D43F, 0x1F9058024BE7A,
    0x036A388E20450, 0x11765E6ADBE4A, 0x024F56626030F, 0x1193FBC32E661, 0x1EFBBB9929B8B,
    0x0E0DEC016967B, 0x1A635793D763A, 0x1E35485044C43, 0x11FC7F38FD839, 0x0F1578EE6CF62,
    0x1148427F2F256, 0x0574B53C867DD, 0x06BC45398B080, 0x12A906D1E2E60, 0x0253776247150,
    0x186C1360C161E, 0x1AA99B9DE3C92, 0x0277E731A2718, 0x04A24E04D94FA, 0x0BE11EBA01832,
    0x1FC411C55741A, 0x0F91968D338FE, 0x16A40B253D87A, 0x09F69BFB47344, 0x1F21FCC7AE367,
    0x12D21F15941A4, 0x087DA94A8270C, 0x1E26BB1596DDC, 0x082B1192D59B7, 0x1DBBAC2ABD410,
    0x185521C9C42D3, 0x00D38A9604701, 0x1A8D97685E3E5, 0x1EBA15FF6A19B, 0x0879A986A90DA,
    0x1F9FA4958DD54, 0x0C811877C742C, 0x047C01D6594CC, 0x16975A067F431, 0x057BDA509FE76,
    0x049EDAFF4257B, 0x1FAD385B82E3B, 0x1F14BCD4FBF7B, 0x1B88EE3C6BB34, 0x0075C240D118A,
    0x031588C9810B2, 0x1A4D125968B66, 0x122A7194EDF41, 0x0A3AA61023AC1, 0x0FCC890EE810E,
    0x03722E148A0B8, 0x16B4B698E163C, 0x07E8810254A1F, 0x1B5D5030E8D9B, 0x17C2949940790,
    0x019B5BB41146D, 0x07383E5C71A19, 0x02DF49AFA565B, 0x118BEF5A5434A, 0x0909B121B7149,
    0x0FE434F6ED9F9, 0x003E42F624894, 0x10AB76ACCB3D0, 0x019F0E3DBD08A, 0x102CFAE722A32,
    0x194E743F3EB93, 0x0E28D52B3A924, 0x1CAF572137FE3, 0x11DB0B5B316C3, 0x0A0010F236C2A,
    0x1720726597654, 0x0CE74820521A0, 0x0E3EB2397D1E1, 0x18A70C56BC0C1, 0x102D8371115F2,
    0x0D8B6E23C53BC, 0x03ECE583E15D2, 0x1840BC9E1BC47, 0x1D61CADB061F9, 0x04F9A2ACF569E,
    0x02638F01FCCB9, 0x15C12C13D0EC4, 0x05AA5F3D8EE61, 0x002976248C617, 0x1E833121D3710,
    0x0EA766D391450, 0x107D87AC4A955, 0x0CF8C4841F424, 0x1380DFEF6F7AA, 0x1D81CE438AE9E,
    0x0DDDDD29EBB79, 0x15E2B21F01C7E, 0x1EF2B452DDFE4, 0x16424D27E81AD, 0x0FEA92AFC78E3,
    0x05A1199ED0E73, 0x17C11C81DD86F, 0x06FA1C1713B9E, 0x0007D880CCD77, 0x0A9121BC99B48,
    0x144887A18BF6F, 0x1321D586649AF, 0x178E04526B37F, 0x1254DD87D17B9, 0x1D29071E8726A,
    0x19CF9D867D9D0, 0x1E386B5FC407B, 0x136CB75D6D6C9, 0x1EE23B0854517, 0x10DD5422A76CE,
    0x1D35BCF3A9449, 0x10D518A2BAF21, 0x178D0467B6018, 0x0BCC0642811EA, 0x0880425D1A343,
    0x1B86D07B0D67C, 0x0C012772FEB15, 0x1CCFFBB4F6229, 0x1994C37D77DC2, 0x1F6F5129EFE76,
    0x0547D96AE6824, 0x1DED421ECB885, 0x01BF3ED6E5593, 0x061F1BF534B9F, 0x1E387126DA24A,
    0x0715F2707527D, 0x1509F37A224C3, 0x1DCFCE8C89AEA, 0x00D1359F37B3B, 0x04719A502D8C1,
    0x067FFFB3E1D47, 0x04D6DD61B1BE6, 0x1B939ABFA55D9, 0x1DFB5D754DF8D, 0x0699006DBEAE6,
    0x0944363B26C46, 0x1FD018DAB7401, 0x1AC272D6AF37B, 0x0CFEB33E52A3F, 0x069B35E12F5C7,
    0x1D76F1161706D, 0x1756DFF934411, 0x08835370AF694, 0x0AF685604FF7E, 0x00A1EFA839FE1,
    0x00C6326EF7A0D, 0x0F9EC6E278F13, 0x1F8C03EB66E83, 0x024FA88F8F3D0, 0x1988AA191048A,
    0x0785DD48F74D8, 0x089D4893EC2BB, 0x05BDFB8747ED9, 0x06229D7A6F04E, 0x0967947529790,
    0x1957E454798E5, 0x14641FE64EC2B, 0x03E6257E7E8BE, 0x08F54A26682ED, 0x00D23B6074EA1,
    0x1037CF9516C00, 0x070ED0A064C14, 0x1F988764AD4CB, 0x12D15A70A24C5, 0x0E8DF781B67CD,
    0x06D62D9319671, 0x018B8CD560080, 0x18EA34EDF001A, 0x0D97C9B346EA5, 0x13C2E3A82ECA4,
    0x1CA51D60231AF, 0x03EBC9A423756, 0x0C70854E7DC41, 0x1A52EB712F15D, 0x15741754B2244,
    0x07E7393CA1B49, 0x09B36C11545A7, 0x02A41600D9963, 0x04BDE917B1FA5, 0x13D188E1D379E,
    0x04AEC7EAB5CAB, 0x0079DFA6021BE, 0x1C7FD5ED3EAC1, 0x1DD9DD127D02E, 0x1882F97261CB5,
    0x0FD290840B386, 0x1D04C7D3B87C2, 0x0D10AE8F5EDAB, 0x0CB803017DDCF, 0x0642783173138,
    0x06AE99E7FAD4D, 0x1C08E1B25B7D2, 0x080FC3E68B020, 0x0623FC4053404, 0x18FE612B6107F,
    0x004AC1112B7B6, 0x125278FAC5256, 0x1A7862D0D24A4, 0x0B6CBBD79880E, 0x0EDA1503A3570,
    0x04261CB042DC1, 0x0C271B42C1A25, 0x1B2852382FD6C, 0x084FF110CAEE5, 0x0552BF16EEFAE,
    0x003B0BC92FC42, 0x05A663A045D79, 0x02F35F9FAFA91, 0x06EE04C68BF08, 0x09F221FF531B9,
    0x07339EA4DB1E2, 0x018DE93AE0FB2, 0x02D18D251D11F, 0x02DB316F9201F, 0x09186B0F5FB45,
    0x1E7FC79C6781C, 0x1F0DE27E48125, 0x027877EECA833, 0x1CD0A0699F9B3, 0x034D74EADF31B,
    0x1B43993B9067A, 0x15FD356E6DB5F, 0x1DC00F04064D2, 0x037ECD283EABD, 0x0EA074B7A36C3,
    0x1BFC0F865A011, 0x0CCA247273EBA, 0x1166EFB7D2A45, 0x1326521EA18F7, 0x1D60735095906,
    0x068DA7421F142, 0x19FF035DFE662, 0x042F6025A5EDE, 0x0154177727CB9, 0x0E7035901123A,
    0x0522E12E5FBBD, 0x11038E48E0163, 0x06028DDEDA7A7, 0x15662A273F9B4, 0x0B209C801D8D0,
    0x07E12FC69C494, 0x1158F823551F2, 0x199D57E429D79, 0x0007811A1F760, 0x1BF49C220B54D,
    0x1A80C5AF6CAB5, 0x10165A619293C, 0x0C690B1C6368C, 0x05D2B8A4ADA71, 0x039AB0CFA7BAB,
    0x1260EC5CBB736, 0x0A82EB6D88E37, 0x030327A45977E, 0x160D3405D1BEA, 0x125465D3856EF,
    0x19DEC2B818802, 0x1DC522E848C4F, 0x17695F4D82CDB, 0x1F4983E86B0AA, 0x042C454B4C852,
    0x03DE4DC57874B, 0x0DA9A08DB7A15, 0x052411DAA74D3, 0x172A30CE9DE31, 0x0ECD726D67689,
    0x1C2F58568E906, 0x043B0D61D7B81, 0x1F9496A8BC363, 0x1A257AFACAA42, 0x1E0CCA74F9540,
    0x05D912C2DF073, 0x10A45CF6A72B9, 0x1C40D4E6D399A, 0x1B2001B2A0F74, 0x1E03F487AD8D1,
    0x00472758DB4F8, 0x0C8ABBF63CDC0, 0x068E4336DFFE2, 0x12093DCAAE93F, 0x0F17DEA10576B,
    0x094E1692C7781, 0x1177826CA7E03, 0x0CA833638DEC1, 0x18105BF51D53E, 0x0488B9A0D7DF7,
    0x1C7C03652ED58, 0x067D5C7D2CCF5, 0x1C5F54D1A9FFC, 0x1D6B4119B0C30, 0x038602070610D,
    0x1B6D376DD8E34, 0x0327BBA9F50DA, 0x02B2214A8D0E2, 0x02CD0CEFFF97C, 0x013F39C35B1D9,
    0x18BDF07B40B85, 0x15E2E77112726, 0x09D2D02E9BC65, 0x1B93DC882A0E0, 0x0251782697C73,
    0x17F15B39746AB, 0x1791347A579F5, 0x15D333D46235F, 0x18FF5C4043845, 0x128860145F4C3,
    0x1C62E64A2CE57, 0x00A70777E0F27, 0x11D8D458A33FF, 0x07B48D40FAE32, 0x190897A316B46,
    0x16C8AEB77DF65, 0x15912B98C6204, 0x1A7E7CAEDF12D, 0x1853A26B244F2, 0x0F5DE787A2C04,
    0x0A0084ACA551E, 0x152EED0159696, 0x16F2D504324C2, 0x0359D8650F9B8, 0x0FE261A286FCF,
    0x01E4944A1C697, 0x19AB248E303EB, 0x0EFADA1EA6F78, 0x189ADF8F5A069, 0x077FA81AB81FF,
    0x1F0E7D40D19AD, 0x1AA8CEA7B3385, 0x09D85D4A97546, 0x16FE18DDB50D8, 0x15A5D13377B99,
    0x142FB35A10875, 0x07BF80085DE6C, 0x130C36AFB142B, 0x0FCEB3D2F92CD, 0x124C8B102EA78,
    0x0FDE7196C045C, 0x05BC0DAA85D8C, 0x06ABDC60BE7E2, 0x17606EDDF7DB8, 0x0505AAD50B30C,
    0x08AF8C07D2FA2, 0x12E7D162C4E55, 0x0AF47E39369D3, 0x1E6E7F5621E12, 0x0F0A20E19EB9D,
    0x10BBF3CFF3447, 0x13F70FF086192, 0x18DDBA9E17F1D, 0x00882D5933407, 0x065B8DA14A1D9,
    0x10E5DFD185887, 0x16C0F9944FEA8, 0x0572EC4C30439, 0x18A8FEFEBC724, 0x06153BF009832,
    0x00954BA77244A, 0x10A0DCC809502, 0x005E3EE283882, 0x0D5EC736048F3, 0x1D0EB29C6CFC7,
    0x15EFBE2E44611, 0x1D30A3DC61584, 0x08574B0CE2C22, 0x172780758199B, 0x1BCDCFACF1041,
    0x1D08C3D68FBB9, 0x16ABAE3A12B21, 0x13C8F5ED92474, 0x154A17E401C3C, 0x11212983B6A9B,
    0x0E8A82245B9CC, 0x13027FFED3C1E, 0x11ED84C53C34D, 0x1539D6B3CA4E1, 0x079FD0BF3C8CF,
    0x1093284C48E46, 0x1C13AE6A8E72E, 0x00E978922BBFA, 0x118F75A563E07, 0x133B6B9F7AAC2,
    0x159F66F2DD8E6, 0x05998EA7E89EC, 0x0518C2955C543, 0x07348587F9567, 0x03502640E76DC,
    0x00F00C508F7C5, 0x1A6E0B8C5AE67, 0x0D8A430C147CC, 0x016C2875AEC85, 0x1A0F501625A5C,
    0x1D6EB0EB8F42C, 0x1F115FA22E403, 0x0DDFB8C6CAEA6, 0x1A7FF6A4815EE, 0x18BFC86A7AFEB,
    0x0890D0043E917, 0x077D6109F0B41, 0x0A361054576A3, 0x0B00DAB02E356, 0x1BD3391B0AEC5,
    0x1522BC869C79E, 0x170DFA1A15710, 0x13BFD65525D35, 0x01CCCBEE29BFF, 0x0AA2751A198CF,
    0x032658966B368, 0x1474121038DBD, 0x19CF3AD7AE3CC, 0x0F4D04395F2FA, 0x0B39E2F99D5F9,
    0x0E4EF6761734E, 0x19310DEDFEF6D, 0x18E3BAA2CC985, 0x1B0B70D1FBD5E, 0x151AECB5218BB,
    0x1BC81E237C17D, 0x069F4A5989DC7, 0x007876ADEE58E, 0x11E60BB2D34CE, 0x1A704563B47D8,
    0x1560FDD0A24B0, 0x03676F90906BF, 0x0D829575138CB, 0x1D93DC1C0FF75, 0x19E280644678A,
    0x038B47CCE38DF, 0x1EC291889FA64, 0x042DBE8F3A7E0, 0x1C739552F6577, 0x096018155FC02,
    0x0994F7C8B00BF, 0x0FBF203A33194, 0x18AD2D84C7C19, 0x0572D7FFF9FA5, 0x0796CE7F56945,
    0x036C283D44A7E, 0x1074B0C08DB56, 0x057B81E39DA1C, 0x1DBB183532E57, 0x076AA64665F90,
    0x0CF5C9D2939F8, 0x0F4877B9E068B, 0x1EFC9FA5F470F, 0x04B712999D548, 0x1ECE3C6B2E415,
    0x1D2A5136663A5, 0x15B687A0342D9, 0x1A0BE82257ACD, 0x1D9018C86CDB8, 0x199470F55E387,
    0x139DCFABDDFE5, 0x0A1B55D84C146, 0x06868D7F3FEED, 0x16B7FAC68334C, 0x0461F6F1AEC7C,
    0x15EA5F8FD135A, 0x179C59B940037, 0x0690E395A73B6, 0x1823A5DCEA1A8, 0x028D30BEA9192,
    0x09BBE6DF70D3F, 0x122EA2B498A74, 0x0ABCA0DC4C444, 0x00F2C816619F6, 0x1722975749130,
    0x14A51AC855001, 0x1BE4310A592A6, 0x0E59189108B18, 0x1B004088BA549, 0x12D40F6C78E6C,
    0x1753C29EA0486, 0x0EA6C83DAB318, 0x11F6335830AF8, 0x064E7A5366A51, 0x1E0A312C308A0,
    0x10C45309CBA7C, 0x0BEE5F6524DDE, 0x00BD15BDAF079, 0x0FC3E797EE5BD, 0x1E7102E535A2B,
    0x06B00617385E8, 0x106DF65B7243E, 0x0CA3DE7B58993, 0x0189606CF3963, 0x109AF7D886D73,
    0x137E1817CD827, 0x0CD9E2FDB00A9, 0x1337B7D809B41, 0x0E59CF9AB8C9F, 0x1D7BD8A093385,
    0x171144ED0F9EF, 0x1CB2034BBE053, 0x06033DFF16C93, 0x0D3BB528553F2, 0x0A69C6616D5C0,
    0x19524A8728EF3, 0x05BA6FA3756E1, 0x076909AF3A39F, 0x180967BDBA878, 0x16C952408DB44,
    0x197E8D60E3DB5, 0x141BCA1C73A68, 0x1C0BB4376DD1F, 0x08C8676B43BAF, 0x1453847360B54,
    0x106B6EA091972, 0x0B47CB43BEF57, 0x10F55AE8507F0, 0x1EC6DB57767F0, 0x07DF89D8FF4A2,
    0x14B4DE0A24194, 0x1AC7ECE36CF98, 0x045F0DA0F367E, 0x1F0703F725CCE, 0x1BECFC0248C90,
    0x1556EC9041D70, 0x08D21DEF02AB2, 0x1EBE6382103BF, 0x1835C47D23CAC, 0x04CCAF2C0C1A6,
    0x07BC5C631FB51, 0x1A6264277EC01, 0x0BC5F36993335, 0x1B6E4A32719EB, 0x1D0FC0B234DBA,
    0x12C54E953D570, 0x096BE50A3BF7F, 0x177E2E26EBA8B, 0x054D9DF392D1E, 0x00560F7859309,
    0x17D023536E908, 0x10C7F2F6C36BA, 0x1CC3214006CEC, 0x0A76E05F44372, 0x09EA66B249BD7,
    0x0BE68DB1E256F, 0x1A248A524F7EF, 0x0FFD1C2644CE6, 0x07870DE140696, 0x1129887AFC75B,
    0x10C2EFE9E916C, 0x1110206E791F8, 0x0828A4E85FD09, 0x1A7BD60F11ABB, 0x1D2FE723CCC26,
    0x009F07987F5BF, 0x11295713A0F4F, 0x181A8EFB6D823, 0x071854EB009B1, 0x0071DF59FB2AC,
    0x05FCA3595B0AD, 0x1376882CD28E1, 0x1C3AA299896E0, 0x0FCD252CA18D6, 0x1A42069303152,
    0x0F37F75CAB3B7, 0x08A77BA2F35A7, 0x1CE693BC0B4ED, 0x0EB51DB4EE98C, 0x1543876FEAFB2,
    0x0CFF043EF8142, 0x017FC1708F0AB, 0x198D6A0244FD5, 0x05AF5C3267A3E, 0x0816EC4847261,
    0x0F96A3EA95EF8, 0x0EAA417E45CEC, 0x1F5DB17994792, 0x06E4996496A93, 0x1C68886F6B322,
    0x163F98274BB08, 0x1108065743CCB, 0x0FE7CF9A86A41, 0x11BB576F58F66, 0x18789EDB0EFCA,
    0x16A86181C973C, 0x0F034519D096E, 0x09B5BBC41F4CE, 0x0433103DFA4FA, 0x1F32A942FA929,
    0x03F04D6180EA1, 0x1C7CF7F077DF1, 0x14DC4B6E9FF8D, 0x0A39D010F6F61, 0x0AAB159D06FCE,
    0x01DD4027D1F5C, 0x077FBFBF1B490, 0x063CD1A02D261, 0x0C055CE44951B, 0x1B5FAAD7D3E70,
    0x12FBD918F224E, 0x09B117186A8EB, 0x11A5516897228, 0x13199F56A8578, 0x0A7D7F0E737C1,
    0x0A5BD8D38488E, 0x0F6CEEE795732, 0x16F5C30452D8D, 0x032815957D02B, 0x029DDD662B707,
    0x1398AE1BD275D, 0x03107B4BBAD4A, 0x1A20C9B579B03, 0x12404CC923C61, 0x12E2CAC20A654,
    0x1AA825071DB79, 0x00B99E83B3875, 0x092FCD9F18D89, 0x19AC66B3DB700, 0x1194AA28A87DE,
    0x109EA757B22C1, 0x14D03D76E8709, 0x080CF25A987F8, 0x1225DEDE42C75, 0x0DC6AF884091D,
    0x0E73D2284C451, 0x1EA8F5F1FD59A, 0x164E27BB8208C, 0x1278D3D374365, 0x0C84886B29E94,
    0x190ECF3BB1CC4, 0x0FB8778F03C67, 0x0C1BC26B4D7E7, 0x06ADBE0077D19, 0x116EFBF69E17D,
    0x0E3DBD7E77A76, 0x0BB3C9BD9F233, 0x17B19287C4248, 0x10C69352F575F, 0x1B10BE2CC2144,
    0x01F8D87834635, 0x123138CB13BB6, 0x1082FEA060BD4, 0x0B923DA60C8E9, 0x1260E444E6B60,
    0x0660D282EEE91, 0x0126ECB56FAD8, 0x013D0615B4DF2, 0x1A281885253CD, 0x0F11B8D3764D0,
    0x0136B6652E68E, 0x1AA105D5B0706, 0x16C23C407D382, 0x08243E1A6014D, 0x0547EBE536913,
    0x1FF82DBBA9926, 0x1EA1DAB515EDF, 0x0ECAD99B8A146, 0x0D9FFE24A6572, 0x056EECD729255,
    0x13E85D9E41096, 0x1F5D1CADEC2B8, 0x1951F68DE74F0, 0x1FA83BACC0E64, 0x0ADAEF4FADF19,
    0x1C1E7B340D090, 0x09FBEC67C6812, 0x0961AFE294D29, 0x18907D86A122C, 0x0E7A934E9FB23,
    0x0833478819C2A, 0x1FB038A9EFABB, 0x146EB8F05561C, 0x0A50FA9FDCBD2, 0x10E8664569AF2,
    0x081681B1878BC, 0x102044F79DC07, 0x15D8B4967AA13, 0x04DBDF544B63B, 0x1021AD16CBF6E,
    0x1026F54D1721F, 0x0A1F0CA634587, 0x0A8DC3113AD13, 0x19336CFC5F5AC, 0x142F1FBD6176E,
    0x195B6828CB69B, 0x118A119D0E995, 0x16412C086CEB5, 0x028CE20102E46, 0x15F22769ED21B,
    0x05C9F202C12D9, 0x0E5F46869035E, 0x06C531CF4A71B, 0x1FFAC6F93619A, 0x1FFA072D41AB2,
    0x0CF9D21F8BBCA, 0x16DC1A8A2EA80, 0x1AD488A60B9FA, 0x0008FBD789F4A, 0x0B48F1195D86D,
    0x1E7E29D8C0402, 0x173B2F7C6D48F, 0x1AD2B32630283, 0x19A799D28400E, 0x178250549B132,
    0x0A29A732B1F0C, 0x19B2657FE76FE, 0x14DBD933F31D3, 0x07CB1B5FACDFD, 0x0623065816EC0,
    0x19CCC6E1C28E5, 0x0401CE82A5472, 0x00094D40E57A8, 0x1192764475B59, 0x0D818D52B6CCF,
    0x09566BD33472F, 0x119AB8E544447, 0x14BFA52005683, 0x082692D728079, 0x1BEFB089E8734,
    0x011CBB44FA9A1, 0x110117ECA3EA6, 0x0F461A7D6CFCC, 0x0509EF05BA9C2, 0x0A431A3C1AF0F,
    0x08C828C8FC8C7, 0x1589167938356, 0x05BBFA2FEC392, 0x0581522B6EED6, 0x145A2ADCA8FE3,
    0x0A537326E179E, 0x16C19A7F68AD7, 0x14F70692A15B0, 0x095E840AD9B54, 0x1480D060B92C9,
    0x03BDA7CCE43D9, 0x09313819C4EB2, 0x196843799FF3A, 0x07117C04CA666, 0x14FA68F7E1F4B,
    0x0702FE08F1B7D, 0x1F48F7E0B6AD2, 0x135AD0C162EC0, 0x05B69118C00E9, 0x0CD42C28639CF,
    0x034A223F701C4, 0x00A4900BF0D0A, 0x18A6802D67E6D, 0x1015369D592A8, 0x0DA2D5F41C552,
    0x0C76C8ADEDCE4, 0x1A92EDD1F4778, 0x0AF60064FC3F7, 0x0A8C0BC41FB44, 0x0F71CB2FD64A6,
    0x126B99426D9A9, 0x0E4668CC6588A, 0x1706A6E9E449D, 0x06D268AD88B0D, 0x008DC5138A0D6,
    0x007D84C305515, 0x13A5CF8B5CA0A, 0x0E96E78030C25, 0x15794A91A3CAE, 0x0C0852F2F2704,
    0x16AC1C0285AA5, 0x00A7D2D49F915, 0x0C0DB34558A9E, 0x07BC64A9C4EF4, 0x022ADBF199D94,
    0x18AF69F1FE1F5, 0x04B5310355739, 0x0AE4F326B7000, 0x0761F1109376D, 0x0842A0B455941,
    0x0B774E6F0588B, 0x105081991CBA4, 0x0B16ADE9AF73F, 0x1315F24A8A7EF, 0x0D7A3B353199B,
    0x10DFDC7EE4E25, 0x1A954CE8AC61E, 0x0BB88898121B6, 0x09DDCF4332EB5, 0x1887537FA8FC8,
    0x18357205ACFF5, 0x0DF85A3C47683, 0x09BE2203AFEA9, 0x0B7B527298F96, 0x13D21D8A01E6C,
    0x03D82BB58DBBB, 0x1CAE08BAA7BE6, 0x1E64587F652F1, 0x062D32D693267, 0x016460D863D66,
    0x06311B4BF755C, 0x1352BF515D33F, 0x0E1FBB552AC6F, 0x07081DBB8665A, 0x125DF524D9D51,
    0x1090DA2963780, 0x01789492139E2, 0x188DA67312FD7, 0x0884EA8E52F7E, 0x0A45009ED56B8,
    0x11BB306709987, 0x111D2B6B4A8DE, 0x08CC32C6FCEF0, 0x04C30A2B3535D, 0x0C49669D4A3EC,
    0x1DE74F7B63FDD, 0x07689D3F992DC, 0x1A0C1C991258F, 0x1B26A1B69D08A, 0x1A4D900C034E6,
    0x0B88E853FAC3F, 0x02287D0AD526B, 0x19F76FC1F42DE, 0x189C8E3C3D466, 0x010D53FD47386,
    0x186E8A801978B, 0x1B778E0A9D035, 0x09AFBC121E1A4, 0x03520DF9CBC27, 0x1CCCD23AA0860,
    0x0EB2FBA303595, 0x085953BAE3CC9, 0x088CDE2EBE697, 0x0EDE84B4E5ECC, 0x08306778EDCDF,
    0x08F546E4D323D, 0x0A830C554F30F, 0x0CC9F0897B870, 0x13F6FEC09BCFF, 0x10786BA2FF367,
    0x039BBE07C9181, 0x0E5B8C9F5363A, 0x19733C9F309D1, 0x0198F23946A23, 0x121D518920EB1,
];
