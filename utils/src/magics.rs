/// Relevant-blocker mask, multiplier and shift for one square of one slider.
#[derive(Debug, Clone, Copy)]
pub struct MagicEntry {
    pub mask: u64,
    pub magic: u64,
    pub shift: u8,
}

impl MagicEntry {
    const fn new(mask: u64, magic: u64, shift: u8) -> Self {
        Self { mask, magic, shift }
    }

    /// Perfect-hash index of an occupancy into this square's attack table.
    #[inline(always)]
    pub const fn index(&self, occupied: u64) -> usize {
        ((occupied & self.mask).wrapping_mul(self.magic) >> self.shift) as usize
    }

    /// Number of slots this square needs in the attack table.
    #[inline(always)]
    pub const fn table_len(&self) -> usize {
        1 << (64 - self.shift)
    }
}

pub const ROOK_MAGICS: [MagicEntry; 64] = [
    MagicEntry::new(0x000101010101017E, 0x2480001240002088, 52),
    MagicEntry::new(0x000202020202027C, 0x0040002000405000, 53),
    MagicEntry::new(0x000404040404047A, 0x2080088010012001, 53),
    MagicEntry::new(0x0008080808080876, 0x0080049001080080, 53),
    MagicEntry::new(0x001010101010106E, 0x0B00020800945100, 53),
    MagicEntry::new(0x002020202020205E, 0x04800A0080211400, 53),
    MagicEntry::new(0x004040404040403E, 0xC0801A0000800100, 53),
    MagicEntry::new(0x008080808080807E, 0x0600084300802204, 52),
    MagicEntry::new(0x0001010101017E00, 0x4240800140006080, 53),
    MagicEntry::new(0x0002020202027C00, 0x0889002080400111, 54),
    MagicEntry::new(0x0004040404047A00, 0x4823004210200100, 54),
    MagicEntry::new(0x0008080808087600, 0xA000808008001000, 54),
    MagicEntry::new(0x0010101010106E00, 0x0020800800340082, 54),
    MagicEntry::new(0x0020202020205E00, 0x004100040039004E, 54),
    MagicEntry::new(0x0040404040403E00, 0x0802003408150200, 54),
    MagicEntry::new(0x0080808080807E00, 0x0800800080104100, 53),
    MagicEntry::new(0x00010101017E0100, 0x0040008002245080, 53),
    MagicEntry::new(0x00020202027C0200, 0x0030004003402000, 54),
    MagicEntry::new(0x00040404047A0400, 0x2400110042600100, 54),
    MagicEntry::new(0x0008080808760800, 0xA000808008001000, 54),
    MagicEntry::new(0x00101010106E1000, 0x0123030004080010, 54),
    MagicEntry::new(0x00202020205E2000, 0x10C0808012000400, 54),
    MagicEntry::new(0x00404040403E4000, 0x0200040022080110, 54),
    MagicEntry::new(0x00808080807E8000, 0x028A420000A10844, 53),
    MagicEntry::new(0x000101017E010100, 0x8040028480014021, 53),
    MagicEntry::new(0x000202027C020200, 0x0841006D00400082, 54),
    MagicEntry::new(0x000404047A040400, 0x0803004300146004, 54),
    MagicEntry::new(0x0008080876080800, 0x0000500280080080, 54),
    MagicEntry::new(0x001010106E101000, 0x0806140080080081, 54),
    MagicEntry::new(0x002020205E202000, 0x0014820080800400, 54),
    MagicEntry::new(0x004040403E404000, 0x1004084400021001, 54),
    MagicEntry::new(0x008080807E808000, 0x0800800080104100, 53),
    MagicEntry::new(0x0001017E01010100, 0x0080800301002041, 53),
    MagicEntry::new(0x0002027C02020200, 0x0030004003402000, 54),
    MagicEntry::new(0x0004047A04040400, 0x9200502001004102, 54),
    MagicEntry::new(0x0008087608080800, 0x0C0200100A004020, 54),
    MagicEntry::new(0x0010106E10101000, 0x0141018801001004, 54),
    MagicEntry::new(0x0020205E20202000, 0x2248040080801A00, 54),
    MagicEntry::new(0x0040403E40404000, 0x0000100804000201, 54),
    MagicEntry::new(0x0080807E80808000, 0x0806004086002514, 53),
    MagicEntry::new(0x00017E0101010100, 0x10807880C0008000, 53),
    MagicEntry::new(0x00027C0202020200, 0x0800200250004002, 54),
    MagicEntry::new(0x00047A0404040400, 0x0102100020008080, 54),
    MagicEntry::new(0x0008760808080800, 0x8200300021010009, 54),
    MagicEntry::new(0x00106E1010101000, 0x6280040801010010, 54),
    MagicEntry::new(0x00205E2020202000, 0x0020844010280120, 54),
    MagicEntry::new(0x00403E4040404000, 0x00000A0108040010, 54),
    MagicEntry::new(0x00807E8080808000, 0x0000040260820001, 53),
    MagicEntry::new(0x007E010101010100, 0x0040008002245080, 53),
    MagicEntry::new(0x007C020202020200, 0x0010600092C00B80, 54),
    MagicEntry::new(0x007A040404040400, 0x8006900188200080, 54),
    MagicEntry::new(0x0076080808080800, 0x0080601202084200, 54),
    MagicEntry::new(0x006E101010101000, 0x4424008115880080, 54),
    MagicEntry::new(0x005E202020202000, 0x0002000408308600, 54),
    MagicEntry::new(0x003E404040404000, 0x0100080201100400, 54),
    MagicEntry::new(0x007E808080808000, 0x008005025C940A00, 53),
    MagicEntry::new(0x7E01010101010100, 0x0220409300208001, 52),
    MagicEntry::new(0x7C02020202020200, 0x8002400980241101, 53),
    MagicEntry::new(0x7A04040404040400, 0x5402005280200842, 53),
    MagicEntry::new(0x7608080808080800, 0x3801000850000423, 53),
    MagicEntry::new(0x6E10101010101000, 0x300A002008043142, 53),
    MagicEntry::new(0x5E20202020202000, 0x1009000400220821, 53),
    MagicEntry::new(0x3E40404040404000, 0x9240028810012224, 53),
    MagicEntry::new(0x7E80808080808000, 0x0001940028410092, 52),
];

pub const BISHOP_MAGICS: [MagicEntry; 64] = [
    MagicEntry::new(0x0040201008040200, 0x0040440812022420, 58),
    MagicEntry::new(0x0000402010080400, 0x3209080800504480, 59),
    MagicEntry::new(0x0000004020100A00, 0x401000A189000040, 59),
    MagicEntry::new(0x0000000040221400, 0x2104070200108490, 59),
    MagicEntry::new(0x0000000002442800, 0x4004242000403041, 59),
    MagicEntry::new(0x0000000204085000, 0x0001012010880821, 59),
    MagicEntry::new(0x0000020408102000, 0x242108084A490101, 59),
    MagicEntry::new(0x0002040810204000, 0x200202B108080400, 58),
    MagicEntry::new(0x0020100804020000, 0x0000044448020400, 59),
    MagicEntry::new(0x0040201008040000, 0xC200088808208020, 59),
    MagicEntry::new(0x00004020100A0000, 0x0000105182810000, 59),
    MagicEntry::new(0x0000004022140000, 0x180078204C400000, 59),
    MagicEntry::new(0x0000000244280000, 0x0001060A10005040, 59),
    MagicEntry::new(0x0000020408500000, 0x00C0950120100000, 59),
    MagicEntry::new(0x0002040810200000, 0x0000050110026100, 59),
    MagicEntry::new(0x0004081020400000, 0x200202B108080400, 59),
    MagicEntry::new(0x0010080402000200, 0x4808000410640820, 59),
    MagicEntry::new(0x0020100804000400, 0x10200A0206020E00, 59),
    MagicEntry::new(0x004020100A000A00, 0x1002001003220020, 57),
    MagicEntry::new(0x0000402214001400, 0x0808000082004000, 57),
    MagicEntry::new(0x0000024428002800, 0x2001001820280200, 57),
    MagicEntry::new(0x0002040850005000, 0x1101008201030552, 57),
    MagicEntry::new(0x0004081020002000, 0x0151000245082000, 59),
    MagicEntry::new(0x0008102040004000, 0x0001001024032462, 59),
    MagicEntry::new(0x0008040200020400, 0x4820042010942810, 59),
    MagicEntry::new(0x0010080400040800, 0x00A8210082040900, 59),
    MagicEntry::new(0x0020100A000A1000, 0x8180A08010010040, 57),
    MagicEntry::new(0x0040221400142200, 0xC24004002A010810, 55),
    MagicEntry::new(0x0002442800284400, 0x0003001001004012, 55),
    MagicEntry::new(0x0004085000500800, 0x0010038022405020, 57),
    MagicEntry::new(0x0008102000201000, 0x01042100040A8200, 59),
    MagicEntry::new(0x0010204000402000, 0x0000444049040200, 59),
    MagicEntry::new(0x0004020002040800, 0x2001101000882008, 59),
    MagicEntry::new(0x0008040004081000, 0x0158026600580800, 59),
    MagicEntry::new(0x00100A000A102000, 0x4001680804440061, 57),
    MagicEntry::new(0x0022140014224000, 0x4000400A00042200, 55),
    MagicEntry::new(0x0044280028440200, 0x0000420021020080, 55),
    MagicEntry::new(0x0008500050080400, 0x0010020020020080, 57),
    MagicEntry::new(0x0010200020100800, 0x5008010040210800, 59),
    MagicEntry::new(0x0020400040201000, 0x000604002001108C, 59),
    MagicEntry::new(0x0002000204081000, 0x0808010920050821, 59),
    MagicEntry::new(0x0004000408102000, 0x4000C41220020800, 59),
    MagicEntry::new(0x000A000A10204000, 0x4000804040400808, 57),
    MagicEntry::new(0x0014001422400000, 0x0000814200809802, 57),
    MagicEntry::new(0x0028002844020000, 0x0000080104020041, 57),
    MagicEntry::new(0x0050005008040200, 0x0414010C42000101, 57),
    MagicEntry::new(0x0020002010080400, 0x3209080800504480, 59),
    MagicEntry::new(0x0040004020100800, 0x8031050202000280, 59),
    MagicEntry::new(0x0000020408102000, 0x242108084A490101, 59),
    MagicEntry::new(0x0000040810204000, 0x082080481A101000, 59),
    MagicEntry::new(0x00000A1020400000, 0x4000004A00902042, 59),
    MagicEntry::new(0x0000142240000000, 0x0100218108480800, 59),
    MagicEntry::new(0x0000284402000000, 0x0C28201202020840, 59),
    MagicEntry::new(0x0000500804020000, 0x0C28201202020840, 59),
    MagicEntry::new(0x0000201008040200, 0x0424040408020088, 59),
    MagicEntry::new(0x0000402010080400, 0x3209080800504480, 59),
    MagicEntry::new(0x0002040810204000, 0x200202B108080400, 58),
    MagicEntry::new(0x0004081020400000, 0x200202B108080400, 59),
    MagicEntry::new(0x000A102040000000, 0x0034C00448441005, 59),
    MagicEntry::new(0x0014224000000000, 0x0000810850208802, 59),
    MagicEntry::new(0x0028440200000000, 0x02000808403D0101, 59),
    MagicEntry::new(0x0050080402000000, 0x0000801006900108, 59),
    MagicEntry::new(0x0020100804020000, 0x0000044448020400, 59),
    MagicEntry::new(0x0040201008040200, 0x0040440812022420, 58),
];
