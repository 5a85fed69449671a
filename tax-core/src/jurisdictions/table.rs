//! The 2022 jurisdiction table.
//!
//! One row per state in alphabetical order, with the District of Columbia
//! last. Rows for bracket-based states share the generic engine; the rest
//! use a dedicated [`JurisdictionRule`] variant.

use rust_decimal_macros::dec;

use crate::{
    Bracket, BracketSchedule, ByStatus, FederalDeduction, FlatTaxConfig, IncomeTreatment,
    Jurisdiction, JurisdictionConfig, JurisdictionRule,
};

/// One bracket schedule for both filing statuses.
const fn schedule(brackets: &'static [Bracket]) -> ByStatus<BracketSchedule<'static>> {
    ByStatus::same(BracketSchedule::new(brackets))
}

const fn schedules(
    single: &'static [Bracket],
    joint: &'static [Bracket],
) -> ByStatus<BracketSchedule<'static>> {
    ByStatus::new(BracketSchedule::new(single), BracketSchedule::new(joint))
}

const AL_SINGLE: &[Bracket] = &[
    Bracket::new(0, dec!(0.02)),
    Bracket::new(500, dec!(0.03)),
    Bracket::new(3000, dec!(0.05)),
];

const AL_JOINT: &[Bracket] = &[
    Bracket::new(0, dec!(0.02)),
    Bracket::new(1000, dec!(0.03)),
    Bracket::new(6000, dec!(0.05)),
];

const AZ_SINGLE: &[Bracket] = &[
    Bracket::new(0, dec!(0.0259)),
    Bracket::new(27808, dec!(0.0334)),
    Bracket::new(55615, dec!(0.0417)),
    Bracket::new(116843, dec!(0.045)),
];

const AZ_JOINT: &[Bracket] = &[
    Bracket::new(0, dec!(0.0259)),
    Bracket::new(55615, dec!(0.0334)),
    Bracket::new(111229, dec!(0.0417)),
    Bracket::new(333684, dec!(0.045)),
];

const AR_BRACKETS: &[Bracket] = &[
    Bracket::new(0, dec!(0.02)),
    Bracket::new(4300, dec!(0.04)),
    Bracket::new(8500, dec!(0.055)),
];

const CA_SINGLE: &[Bracket] = &[
    Bracket::new(0, dec!(0.01)),
    Bracket::new(9325, dec!(0.02)),
    Bracket::new(22107, dec!(0.04)),
    Bracket::new(34892, dec!(0.06)),
    Bracket::new(48435, dec!(0.08)),
    Bracket::new(61214, dec!(0.093)),
    Bracket::new(312686, dec!(0.103)),
    Bracket::new(375221, dec!(0.113)),
    Bracket::new(625369, dec!(0.123)),
    Bracket::new(1000000, dec!(0.133)),
];

const CA_JOINT: &[Bracket] = &[
    Bracket::new(0, dec!(0.01)),
    Bracket::new(18650, dec!(0.02)),
    Bracket::new(44214, dec!(0.04)),
    Bracket::new(69784, dec!(0.06)),
    Bracket::new(96870, dec!(0.08)),
    Bracket::new(122428, dec!(0.093)),
    Bracket::new(625372, dec!(0.103)),
    Bracket::new(750442, dec!(0.113)),
    Bracket::new(1000000, dec!(0.123)),
    Bracket::new(1250738, dec!(0.133)),
];

const CO_BRACKETS: &[Bracket] = &[Bracket::new(0, dec!(0.0455))];

const CT_SINGLE: &[Bracket] = &[
    Bracket::new(0, dec!(0.03)),
    Bracket::new(10000, dec!(0.05)),
    Bracket::new(50000, dec!(0.055)),
    Bracket::new(100000, dec!(0.06)),
    Bracket::new(200000, dec!(0.065)),
    Bracket::new(250000, dec!(0.069)),
    Bracket::new(500000, dec!(0.0699)),
];

const CT_JOINT: &[Bracket] = &[
    Bracket::new(0, dec!(0.03)),
    Bracket::new(20000, dec!(0.05)),
    Bracket::new(100000, dec!(0.055)),
    Bracket::new(200000, dec!(0.06)),
    Bracket::new(400000, dec!(0.065)),
    Bracket::new(500000, dec!(0.069)),
    Bracket::new(1000000, dec!(0.0699)),
];

const DE_BRACKETS: &[Bracket] = &[
    Bracket::new(2000, dec!(0.022)),
    Bracket::new(5000, dec!(0.039)),
    Bracket::new(10000, dec!(0.048)),
    Bracket::new(20000, dec!(0.052)),
    Bracket::new(25000, dec!(0.0555)),
    Bracket::new(60000, dec!(0.066)),
];

const GA_SINGLE: &[Bracket] = &[
    Bracket::new(0, dec!(0.01)),
    Bracket::new(750, dec!(0.02)),
    Bracket::new(2250, dec!(0.03)),
    Bracket::new(3750, dec!(0.04)),
    Bracket::new(5250, dec!(0.05)),
    Bracket::new(7000, dec!(0.0575)),
];

const GA_JOINT: &[Bracket] = &[
    Bracket::new(0, dec!(0.01)),
    Bracket::new(1000, dec!(0.02)),
    Bracket::new(3000, dec!(0.03)),
    Bracket::new(5000, dec!(0.04)),
    Bracket::new(7000, dec!(0.05)),
    Bracket::new(10000, dec!(0.0575)),
];

const HI_SINGLE: &[Bracket] = &[
    Bracket::new(0, dec!(0.014)),
    Bracket::new(2400, dec!(0.032)),
    Bracket::new(4800, dec!(0.055)),
    Bracket::new(9600, dec!(0.064)),
    Bracket::new(14400, dec!(0.068)),
    Bracket::new(19200, dec!(0.072)),
    Bracket::new(24000, dec!(0.076)),
    Bracket::new(36000, dec!(0.079)),
    Bracket::new(48000, dec!(0.0825)),
    Bracket::new(150000, dec!(0.09)),
    Bracket::new(175000, dec!(0.1)),
    Bracket::new(200000, dec!(0.11)),
];

const HI_JOINT: &[Bracket] = &[
    Bracket::new(0, dec!(0.014)),
    Bracket::new(4800, dec!(0.032)),
    Bracket::new(9600, dec!(0.055)),
    Bracket::new(19200, dec!(0.064)),
    Bracket::new(28800, dec!(0.068)),
    Bracket::new(38400, dec!(0.072)),
    Bracket::new(48000, dec!(0.076)),
    Bracket::new(72000, dec!(0.079)),
    Bracket::new(96000, dec!(0.0825)),
    Bracket::new(300000, dec!(0.09)),
    Bracket::new(350000, dec!(0.1)),
    Bracket::new(400000, dec!(0.11)),
];

const ID_SINGLE: &[Bracket] = &[
    Bracket::new(0, dec!(0.01)),
    Bracket::new(1588, dec!(0.03)),
    Bracket::new(4763, dec!(0.045)),
    Bracket::new(7939, dec!(0.06)),
];

const ID_JOINT: &[Bracket] = &[
    Bracket::new(0, dec!(0.01)),
    Bracket::new(3176, dec!(0.03)),
    Bracket::new(9526, dec!(0.045)),
    Bracket::new(15878, dec!(0.06)),
];

const IL_BRACKETS: &[Bracket] = &[Bracket::new(0, dec!(0.0495))];

const IN_BRACKETS: &[Bracket] = &[Bracket::new(0, dec!(0.0323))];

const IA_BRACKETS: &[Bracket] = &[
    Bracket::new(0, dec!(0.0033)),
    Bracket::new(1743, dec!(0.0067)),
    Bracket::new(3486, dec!(0.0225)),
    Bracket::new(6972, dec!(0.0414)),
    Bracket::new(15687, dec!(0.0563)),
    Bracket::new(26145, dec!(0.0596)),
    Bracket::new(34860, dec!(0.0625)),
    Bracket::new(52290, dec!(0.0744)),
    Bracket::new(78435, dec!(0.0853)),
];

const KS_SINGLE: &[Bracket] = &[
    Bracket::new(0, dec!(0.031)),
    Bracket::new(15000, dec!(0.0525)),
    Bracket::new(30000, dec!(0.057)),
];

const KS_JOINT: &[Bracket] = &[
    Bracket::new(0, dec!(0.031)),
    Bracket::new(30000, dec!(0.0525)),
    Bracket::new(60000, dec!(0.057)),
];

const KY_BRACKETS: &[Bracket] = &[Bracket::new(0, dec!(0.05))];

const LA_SINGLE: &[Bracket] = &[
    Bracket::new(0, dec!(0.0185)),
    Bracket::new(12500, dec!(0.035)),
    Bracket::new(50000, dec!(0.0425)),
];

const LA_JOINT: &[Bracket] = &[
    Bracket::new(0, dec!(0.0185)),
    Bracket::new(25000, dec!(0.035)),
    Bracket::new(100000, dec!(0.0425)),
];

const ME_SINGLE: &[Bracket] = &[
    Bracket::new(0, dec!(0.058)),
    Bracket::new(23000, dec!(0.0675)),
    Bracket::new(54450, dec!(0.0715)),
];

const ME_JOINT: &[Bracket] = &[
    Bracket::new(0, dec!(0.058)),
    Bracket::new(46000, dec!(0.0675)),
    Bracket::new(108900, dec!(0.0715)),
];

const MD_SINGLE: &[Bracket] = &[
    Bracket::new(0, dec!(0.02)),
    Bracket::new(1000, dec!(0.03)),
    Bracket::new(2000, dec!(0.04)),
    Bracket::new(3000, dec!(0.0475)),
    Bracket::new(100000, dec!(0.05)),
    Bracket::new(125000, dec!(0.0525)),
    Bracket::new(150000, dec!(0.055)),
    Bracket::new(250000, dec!(0.0575)),
];

const MD_JOINT: &[Bracket] = &[
    Bracket::new(0, dec!(0.02)),
    Bracket::new(1000, dec!(0.03)),
    Bracket::new(2000, dec!(0.04)),
    Bracket::new(3000, dec!(0.0475)),
    Bracket::new(150000, dec!(0.05)),
    Bracket::new(175000, dec!(0.0525)),
    Bracket::new(225000, dec!(0.055)),
    Bracket::new(300000, dec!(0.0575)),
];

const MA_BRACKETS: &[Bracket] = &[Bracket::new(0, dec!(0.05))];

const MI_BRACKETS: &[Bracket] = &[Bracket::new(0, dec!(0.0425))];

const MN_SINGLE: &[Bracket] = &[
    Bracket::new(0, dec!(0.0535)),
    Bracket::new(28080, dec!(0.068)),
    Bracket::new(92230, dec!(0.0785)),
    Bracket::new(171220, dec!(0.0985)),
];

const MN_JOINT: &[Bracket] = &[
    Bracket::new(0, dec!(0.0535)),
    Bracket::new(41050, dec!(0.068)),
    Bracket::new(163060, dec!(0.0785)),
    Bracket::new(284810, dec!(0.0985)),
];

const MS_BRACKETS: &[Bracket] = &[
    Bracket::new(5000, dec!(0.04)),
    Bracket::new(10000, dec!(0.05)),
];

const MO_BRACKETS: &[Bracket] = &[
    Bracket::new(108, dec!(0.015)),
    Bracket::new(1088, dec!(0.02)),
    Bracket::new(2176, dec!(0.025)),
    Bracket::new(3264, dec!(0.03)),
    Bracket::new(4352, dec!(0.035)),
    Bracket::new(5440, dec!(0.04)),
    Bracket::new(6528, dec!(0.045)),
    Bracket::new(7616, dec!(0.05)),
    Bracket::new(8704, dec!(0.054)),
];

const MT_BRACKETS: &[Bracket] = &[
    Bracket::new(0, dec!(0.01)),
    Bracket::new(3100, dec!(0.02)),
    Bracket::new(5500, dec!(0.03)),
    Bracket::new(8400, dec!(0.04)),
    Bracket::new(11400, dec!(0.05)),
    Bracket::new(14600, dec!(0.06)),
    Bracket::new(18800, dec!(0.0675)),
];

const NE_SINGLE: &[Bracket] = &[
    Bracket::new(0, dec!(0.0246)),
    Bracket::new(3440, dec!(0.0351)),
    Bracket::new(20590, dec!(0.0501)),
    Bracket::new(33180, dec!(0.0684)),
];

const NE_JOINT: &[Bracket] = &[
    Bracket::new(0, dec!(0.0246)),
    Bracket::new(6860, dec!(0.0351)),
    Bracket::new(41190, dec!(0.0501)),
    Bracket::new(66360, dec!(0.0684)),
];

const NJ_SINGLE: &[Bracket] = &[
    Bracket::new(0, dec!(0.014)),
    Bracket::new(20000, dec!(0.0175)),
    Bracket::new(35000, dec!(0.035)),
    Bracket::new(40000, dec!(0.05525)),
    Bracket::new(75000, dec!(0.0637)),
    Bracket::new(500000, dec!(0.0897)),
    Bracket::new(1000000, dec!(0.1075)),
];

const NJ_JOINT: &[Bracket] = &[
    Bracket::new(0, dec!(0.014)),
    Bracket::new(20000, dec!(0.0175)),
    Bracket::new(50000, dec!(0.0245)),
    Bracket::new(70000, dec!(0.035)),
    Bracket::new(80000, dec!(0.05525)),
    Bracket::new(150000, dec!(0.0637)),
    Bracket::new(500000, dec!(0.0897)),
    Bracket::new(1000000, dec!(0.1075)),
];

const NM_SINGLE: &[Bracket] = &[
    Bracket::new(0, dec!(0.017)),
    Bracket::new(5500, dec!(0.032)),
    Bracket::new(11000, dec!(0.047)),
    Bracket::new(16000, dec!(0.049)),
    Bracket::new(210000, dec!(0.059)),
];

const NM_JOINT: &[Bracket] = &[
    Bracket::new(0, dec!(0.017)),
    Bracket::new(8000, dec!(0.032)),
    Bracket::new(16000, dec!(0.047)),
    Bracket::new(24000, dec!(0.049)),
    Bracket::new(315000, dec!(0.059)),
];

const NY_SINGLE: &[Bracket] = &[
    Bracket::new(0, dec!(0.04)),
    Bracket::new(8500, dec!(0.045)),
    Bracket::new(11700, dec!(0.0525)),
    Bracket::new(13900, dec!(0.0585)),
    Bracket::new(80650, dec!(0.0625)),
    Bracket::new(215400, dec!(0.0685)),
    Bracket::new(1077550, dec!(0.0965)),
    Bracket::new(5000000, dec!(0.103)),
    Bracket::new(25000000, dec!(0.109)),
];

const NY_JOINT: &[Bracket] = &[
    Bracket::new(0, dec!(0.04)),
    Bracket::new(17150, dec!(0.045)),
    Bracket::new(23600, dec!(0.0525)),
    Bracket::new(27900, dec!(0.0585)),
    Bracket::new(161550, dec!(0.0625)),
    Bracket::new(323200, dec!(0.0685)),
    Bracket::new(2155350, dec!(0.0965)),
    Bracket::new(5000000, dec!(0.103)),
    Bracket::new(25000000, dec!(0.109)),
];

const NC_BRACKETS: &[Bracket] = &[Bracket::new(0, dec!(0.0499))];

const ND_SINGLE: &[Bracket] = &[
    Bracket::new(0, dec!(0.011)),
    Bracket::new(40525, dec!(0.0204)),
    Bracket::new(98100, dec!(0.0227)),
    Bracket::new(204675, dec!(0.0264)),
    Bracket::new(445000, dec!(0.029)),
];

const ND_JOINT: &[Bracket] = &[
    Bracket::new(0, dec!(0.011)),
    Bracket::new(67700, dec!(0.0204)),
    Bracket::new(163550, dec!(0.0227)),
    Bracket::new(249150, dec!(0.0264)),
    Bracket::new(445000, dec!(0.029)),
];

const OH_BRACKETS: &[Bracket] = &[
    Bracket::new(25000, dec!(0.02765)),
    Bracket::new(44250, dec!(0.03226)),
    Bracket::new(88450, dec!(0.03688)),
    Bracket::new(110650, dec!(0.0399)),
];

const OK_SINGLE: &[Bracket] = &[
    Bracket::new(0, dec!(0.0025)),
    Bracket::new(1000, dec!(0.0075)),
    Bracket::new(2500, dec!(0.0175)),
    Bracket::new(3750, dec!(0.0275)),
    Bracket::new(4900, dec!(0.0375)),
    Bracket::new(7200, dec!(0.0475)),
];

const OK_JOINT: &[Bracket] = &[
    Bracket::new(0, dec!(0.0025)),
    Bracket::new(2000, dec!(0.0075)),
    Bracket::new(5000, dec!(0.0175)),
    Bracket::new(7500, dec!(0.0275)),
    Bracket::new(9800, dec!(0.0375)),
    Bracket::new(12200, dec!(0.0475)),
];

const OR_SINGLE: &[Bracket] = &[
    Bracket::new(0, dec!(0.0475)),
    Bracket::new(3650, dec!(0.0675)),
    Bracket::new(9200, dec!(0.0875)),
    Bracket::new(125000, dec!(0.099)),
];

const OR_JOINT: &[Bracket] = &[
    Bracket::new(0, dec!(0.0475)),
    Bracket::new(7300, dec!(0.0675)),
    Bracket::new(18400, dec!(0.0875)),
    Bracket::new(250000, dec!(0.099)),
];

const PA_BRACKETS: &[Bracket] = &[Bracket::new(0, dec!(0.0307))];

const RI_BRACKETS: &[Bracket] = &[
    Bracket::new(0, dec!(0.0375)),
    Bracket::new(68200, dec!(0.0475)),
    Bracket::new(155050, dec!(0.0599)),
];

const SC_BRACKETS: &[Bracket] = &[
    Bracket::new(0, dec!(0)),
    Bracket::new(3200, dec!(0.03)),
    Bracket::new(6410, dec!(0.04)),
    Bracket::new(9620, dec!(0.05)),
    Bracket::new(12820, dec!(0.06)),
    Bracket::new(16040, dec!(0.07)),
];

const UT_BRACKETS: &[Bracket] = &[Bracket::new(0, dec!(0.0495))];

const VT_SINGLE: &[Bracket] = &[
    Bracket::new(0, dec!(0.0335)),
    Bracket::new(40950, dec!(0.066)),
    Bracket::new(99200, dec!(0.076)),
    Bracket::new(206950, dec!(0.0875)),
];

const VT_JOINT: &[Bracket] = &[
    Bracket::new(0, dec!(0.0335)),
    Bracket::new(68400, dec!(0.066)),
    Bracket::new(165350, dec!(0.076)),
    Bracket::new(251950, dec!(0.0875)),
];

const VA_BRACKETS: &[Bracket] = &[
    Bracket::new(0, dec!(0.02)),
    Bracket::new(3000, dec!(0.03)),
    Bracket::new(5000, dec!(0.05)),
    Bracket::new(17000, dec!(0.0575)),
];

const WV_BRACKETS: &[Bracket] = &[
    Bracket::new(0, dec!(0.03)),
    Bracket::new(10000, dec!(0.04)),
    Bracket::new(25000, dec!(0.045)),
    Bracket::new(40000, dec!(0.06)),
    Bracket::new(60000, dec!(0.065)),
];

const WI_SINGLE: &[Bracket] = &[
    Bracket::new(0, dec!(0.0354)),
    Bracket::new(12760, dec!(0.0465)),
    Bracket::new(25520, dec!(0.053)),
    Bracket::new(280950, dec!(0.0765)),
];

const WI_JOINT: &[Bracket] = &[
    Bracket::new(0, dec!(0.0354)),
    Bracket::new(17010, dec!(0.0465)),
    Bracket::new(34030, dec!(0.053)),
    Bracket::new(374030, dec!(0.0765)),
];

const DC_BRACKETS: &[Bracket] = &[
    Bracket::new(0, dec!(0.04)),
    Bracket::new(10000, dec!(0.06)),
    Bracket::new(40000, dec!(0.065)),
    Bracket::new(60000, dec!(0.085)),
    Bracket::new(250000, dec!(0.0925)),
    Bracket::new(500000, dec!(0.0975)),
    Bracket::new(1000000, dec!(0.1075)),
];

const AL: JurisdictionConfig = JurisdictionConfig::new(schedules(AL_SINGLE, AL_JOINT))
    .standard_deduction(2500, 7500)
    .personal_exemption(1500, 3000)
    .dependent_exemption(1000)
    .federal_deduction(FederalDeduction::Unlimited);

const AZ: JurisdictionConfig = JurisdictionConfig::new(schedules(AZ_SINGLE, AZ_JOINT))
    .standard_deduction(12950, 25900)
    .dependent_exemption(100)
    .dependent_credit();

const AR: JurisdictionConfig = JurisdictionConfig::new(schedule(AR_BRACKETS))
    .standard_deduction(2200, 4400)
    .personal_exemption(29, 58)
    .exemption_credit()
    .dependent_exemption(29)
    .dependent_credit()
    .capital_gains(IncomeTreatment::PartialInclusion(dec!(0.5)));

const CA: JurisdictionConfig = JurisdictionConfig::new(schedules(CA_SINGLE, CA_JOINT))
    .standard_deduction(4803, 9606)
    .personal_exemption(129, 258)
    .exemption_credit()
    .dependent_exemption(400)
    .dependent_credit();

const CO: JurisdictionConfig = JurisdictionConfig::new(schedule(CO_BRACKETS))
    .standard_deduction(12950, 25900)
    .dependent_exemption(400)
    .dependent_credit();

const CT: JurisdictionConfig = JurisdictionConfig::new(schedules(CT_SINGLE, CT_JOINT))
    .personal_exemption(15000, 24000)
    .capital_gains(IncomeTreatment::FlatRate(dec!(0.07)));

const DE: JurisdictionConfig = JurisdictionConfig::new(schedule(DE_BRACKETS))
    .standard_deduction(3250, 6500)
    .personal_exemption(110, 220)
    .exemption_credit()
    .dependent_exemption(110)
    .dependent_credit();

const GA: JurisdictionConfig = JurisdictionConfig::new(schedules(GA_SINGLE, GA_JOINT))
    .standard_deduction(5400, 7100)
    .personal_exemption(2700, 7400)
    .dependent_exemption(3000);

const HI: JurisdictionConfig = JurisdictionConfig::new(schedules(HI_SINGLE, HI_JOINT))
    .standard_deduction(2200, 4400)
    .personal_exemption(1144, 2288)
    .dependent_exemption(1144)
    .capital_gains(IncomeTreatment::FlatRate(dec!(0.0725)));

const ID: JurisdictionConfig = JurisdictionConfig::new(schedules(ID_SINGLE, ID_JOINT))
    .standard_deduction(12950, 25900);

const IL: JurisdictionConfig = JurisdictionConfig::new(schedule(IL_BRACKETS))
    .personal_exemption(2375, 4750);

const IN: JurisdictionConfig = JurisdictionConfig::new(schedule(IN_BRACKETS))
    .personal_exemption(1000, 2000)
    .dependent_exemption(1000);

const IA: JurisdictionConfig = JurisdictionConfig::new(schedule(IA_BRACKETS))
    .standard_deduction(2210, 5450)
    .personal_exemption(40, 80)
    .exemption_credit()
    .dependent_exemption(40)
    .dependent_credit()
    .federal_deduction(FederalDeduction::Unlimited);

const KS: JurisdictionConfig = JurisdictionConfig::new(schedules(KS_SINGLE, KS_JOINT))
    .standard_deduction(3500, 8000)
    .personal_exemption(2250, 4500)
    .dependent_exemption(2250);

const KY: JurisdictionConfig = JurisdictionConfig::new(schedule(KY_BRACKETS))
    .standard_deduction(2770, 5540);

const LA: JurisdictionConfig = JurisdictionConfig::new(schedules(LA_SINGLE, LA_JOINT))
    .personal_exemption(4500, 9000)
    .dependent_exemption(1000);

const ME: JurisdictionConfig = JurisdictionConfig::new(schedules(ME_SINGLE, ME_JOINT))
    .standard_deduction(12950, 25900)
    .personal_exemption(4450, 8900)
    .dependent_exemption(300)
    .dependent_credit();

const MD: JurisdictionConfig = JurisdictionConfig::new(schedules(MD_SINGLE, MD_JOINT))
    .standard_deduction(2350, 4700)
    .personal_exemption(3200, 6400)
    .dependent_exemption(3200);

const MA: JurisdictionConfig = JurisdictionConfig::new(schedule(MA_BRACKETS))
    .personal_exemption(4400, 8800)
    .dependent_exemption(1000);

const MI: JurisdictionConfig = JurisdictionConfig::new(schedule(MI_BRACKETS))
    .personal_exemption(5000, 10000)
    .dependent_exemption(5000);

const MN: JurisdictionConfig = JurisdictionConfig::new(schedules(MN_SINGLE, MN_JOINT))
    .standard_deduction(12900, 25800)
    .dependent_exemption(4450);

const MS: JurisdictionConfig = JurisdictionConfig::new(schedule(MS_BRACKETS))
    .standard_deduction(2300, 4600)
    .personal_exemption(6000, 12000)
    .dependent_exemption(1500);

const MO: JurisdictionConfig = JurisdictionConfig::new(schedule(MO_BRACKETS))
    .standard_deduction(12950, 25900)
    .federal_deduction(FederalDeduction::Capped(ByStatus::same(5000)));

const MT: JurisdictionConfig = JurisdictionConfig::new(schedule(MT_BRACKETS))
    .standard_deduction(4830, 9660)
    .personal_exemption(2580, 5160)
    .dependent_exemption(2580)
    .federal_deduction(FederalDeduction::Capped(ByStatus::new(5000, 10000)));

const NE: JurisdictionConfig = JurisdictionConfig::new(schedules(NE_SINGLE, NE_JOINT))
    .standard_deduction(7350, 14700)
    .personal_exemption(146, 292)
    .exemption_credit()
    .dependent_exemption(146)
    .dependent_credit();

const NH: FlatTaxConfig = FlatTaxConfig {
    rate: dec!(0.05),
    exemption: ByStatus::new(2400, 4800),
};

const NJ: JurisdictionConfig = JurisdictionConfig::new(schedules(NJ_SINGLE, NJ_JOINT))
    .personal_exemption(1000, 2000)
    .dependent_exemption(1500);

const NM: JurisdictionConfig = JurisdictionConfig::new(schedules(NM_SINGLE, NM_JOINT))
    .standard_deduction(12950, 25900)
    .dependent_exemption(4000)
    .gains_deduction(1000, dec!(0.4));

const NY: JurisdictionConfig = JurisdictionConfig::new(schedules(NY_SINGLE, NY_JOINT))
    .standard_deduction(8000, 16050)
    .dependent_exemption(1000);

const NC: JurisdictionConfig = JurisdictionConfig::new(schedule(NC_BRACKETS))
    .standard_deduction(12750, 25500);

const ND: JurisdictionConfig = JurisdictionConfig::new(schedules(ND_SINGLE, ND_JOINT))
    .standard_deduction(12950, 25900)
    .capital_gains(IncomeTreatment::PartialInclusion(dec!(0.6)));

const OH: JurisdictionConfig = JurisdictionConfig::new(schedule(OH_BRACKETS))
    .personal_exemption(2400, 4800)
    .dependent_exemption(2400);

const OK: JurisdictionConfig = JurisdictionConfig::new(schedules(OK_SINGLE, OK_JOINT))
    .standard_deduction(6350, 12700)
    .personal_exemption(1000, 2000)
    .dependent_exemption(1000);

const OR: JurisdictionConfig = JurisdictionConfig::new(schedules(OR_SINGLE, OR_JOINT))
    .standard_deduction(2420, 4840)
    .personal_exemption(219, 436)
    .exemption_credit()
    .dependent_exemption(219)
    .dependent_credit()
    .federal_deduction(FederalDeduction::Capped(ByStatus::same(6950)));

const PA: JurisdictionConfig = JurisdictionConfig::new(schedule(PA_BRACKETS));

const RI: JurisdictionConfig = JurisdictionConfig::new(schedule(RI_BRACKETS))
    .standard_deduction(9300, 18600)
    .personal_exemption(4350, 8700)
    .dependent_exemption(4350);

const SC: JurisdictionConfig = JurisdictionConfig::new(schedule(SC_BRACKETS))
    .standard_deduction(12950, 25900)
    .dependent_exemption(4300)
    .capital_gains(IncomeTreatment::PartialInclusion(dec!(0.56)));

const UT: JurisdictionConfig = JurisdictionConfig::new(schedule(UT_BRACKETS))
    .standard_deduction(777, 1554)
    .dependent_exemption(1750);

const VT: JurisdictionConfig = JurisdictionConfig::new(schedules(VT_SINGLE, VT_JOINT))
    .standard_deduction(6350, 12700)
    .personal_exemption(4350, 8700)
    .dependent_exemption(4350);

const VA: JurisdictionConfig = JurisdictionConfig::new(schedule(VA_BRACKETS))
    .standard_deduction(4500, 9000)
    .personal_exemption(930, 1860)
    .dependent_exemption(930);

const WA: FlatTaxConfig = FlatTaxConfig {
    rate: dec!(0.07),
    exemption: ByStatus::same(250000),
};

const WV: JurisdictionConfig = JurisdictionConfig::new(schedule(WV_BRACKETS))
    .personal_exemption(2000, 4000)
    .dependent_exemption(2000);

const WI: JurisdictionConfig = JurisdictionConfig::new(schedules(WI_SINGLE, WI_JOINT))
    .standard_deduction(11790, 21820)
    .personal_exemption(700, 1400)
    .dependent_exemption(700);

const DC: JurisdictionConfig = JurisdictionConfig::new(schedule(DC_BRACKETS))
    .standard_deduction(12950, 25900);

pub static JURISDICTIONS: [Jurisdiction; 51] = [
    Jurisdiction::new("Alabama", "AL", JurisdictionRule::Standard(AL)),
    Jurisdiction::new("Alaska", "AK", JurisdictionRule::NoTax),
    Jurisdiction::new("Arizona", "AZ", JurisdictionRule::Standard(AZ)),
    Jurisdiction::new("Arkansas", "AR", JurisdictionRule::Standard(AR)),
    Jurisdiction::new("California", "CA", JurisdictionRule::Standard(CA)),
    Jurisdiction::new("Colorado", "CO", JurisdictionRule::Standard(CO)),
    Jurisdiction::new("Connecticut", "CT", JurisdictionRule::Standard(CT)),
    Jurisdiction::new("Delaware", "DE", JurisdictionRule::Standard(DE)),
    Jurisdiction::new("Florida", "FL", JurisdictionRule::NoTax),
    Jurisdiction::new("Georgia", "GA", JurisdictionRule::Standard(GA)),
    Jurisdiction::new("Hawaii", "HI", JurisdictionRule::Standard(HI)),
    Jurisdiction::new("Idaho", "ID", JurisdictionRule::Standard(ID)),
    Jurisdiction::new("Illinois", "IL", JurisdictionRule::Standard(IL)),
    Jurisdiction::new("Indiana", "IN", JurisdictionRule::Standard(IN)),
    Jurisdiction::new("Iowa", "IA", JurisdictionRule::Standard(IA)),
    Jurisdiction::new("Kansas", "KS", JurisdictionRule::Standard(KS)),
    Jurisdiction::new("Kentucky", "KY", JurisdictionRule::Standard(KY)),
    Jurisdiction::new("Louisiana", "LA", JurisdictionRule::Standard(LA)),
    Jurisdiction::new("Maine", "ME", JurisdictionRule::Standard(ME)),
    Jurisdiction::new("Maryland", "MD", JurisdictionRule::Standard(MD)),
    Jurisdiction::new("Massachusetts", "MA", JurisdictionRule::Standard(MA)),
    Jurisdiction::new("Michigan", "MI", JurisdictionRule::Standard(MI)),
    Jurisdiction::new("Minnesota", "MN", JurisdictionRule::Standard(MN)),
    Jurisdiction::new("Mississippi", "MS", JurisdictionRule::Standard(MS)),
    Jurisdiction::new("Missouri", "MO", JurisdictionRule::Standard(MO)),
    Jurisdiction::new("Montana", "MT", JurisdictionRule::Standard(MT)),
    Jurisdiction::new("Nebraska", "NE", JurisdictionRule::Standard(NE)),
    Jurisdiction::new("Nevada", "NV", JurisdictionRule::NoTax),
    Jurisdiction::new("New Hampshire", "NH", JurisdictionRule::DividendOnly(NH)),
    Jurisdiction::new("New Jersey", "NJ", JurisdictionRule::Standard(NJ)),
    Jurisdiction::new("New Mexico", "NM", JurisdictionRule::Standard(NM)),
    Jurisdiction::new("New York", "NY", JurisdictionRule::Standard(NY)),
    Jurisdiction::new("North Carolina", "NC", JurisdictionRule::Standard(NC)),
    Jurisdiction::new("North Dakota", "ND", JurisdictionRule::Standard(ND)),
    Jurisdiction::new("Ohio", "OH", JurisdictionRule::Standard(OH)),
    Jurisdiction::new("Oklahoma", "OK", JurisdictionRule::Standard(OK)),
    Jurisdiction::new("Oregon", "OR", JurisdictionRule::Standard(OR)),
    Jurisdiction::new("Pennsylvania", "PA", JurisdictionRule::Standard(PA)),
    Jurisdiction::new("Rhode Island", "RI", JurisdictionRule::Standard(RI)),
    Jurisdiction::new("South Carolina", "SC", JurisdictionRule::Standard(SC)),
    Jurisdiction::new("South Dakota", "SD", JurisdictionRule::NoTax),
    Jurisdiction::new("Tennessee", "TN", JurisdictionRule::NoTax),
    Jurisdiction::new("Texas", "TX", JurisdictionRule::NoTax),
    Jurisdiction::new("Utah", "UT", JurisdictionRule::CreditBased(UT)),
    Jurisdiction::new("Vermont", "VT", JurisdictionRule::Standard(VT)),
    Jurisdiction::new("Virginia", "VA", JurisdictionRule::Standard(VA)),
    Jurisdiction::new("Washington", "WA", JurisdictionRule::CapitalGainsOnly(WA)),
    Jurisdiction::new("West Virginia", "WV", JurisdictionRule::Standard(WV)),
    Jurisdiction::new("Wisconsin", "WI", JurisdictionRule::Standard(WI)),
    Jurisdiction::new("Wyoming", "WY", JurisdictionRule::NoTax),
    Jurisdiction::new("Washington D.C.", "DC", JurisdictionRule::Standard(DC)),
];
