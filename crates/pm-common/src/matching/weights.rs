/// Reference bonus table.
/// Base 30 is the unconditional regional-alignment floor; every other term is
/// capped so that no single factor can dominate the total.
pub const REFERENCE_BONUSES: BonusTable = BonusTable {
    base_score: 30.0,
    keyword_per_match: 15.0,
    keyword_cap: 45.0,
    graduation_floor: 55.0,
    graduation_pivot: 50.0,
    graduation_divisor: 4.0,
    graduation_cap: 8.0,
    stem_floor: 15.0,
    stem_divisor: 2.0,
    stem_cap: 10.0,
    endowment_floor_million: 200.0,
    endowment_bonus: 4.0,
    research_intensive_bonus: 12.0,
    large_enrollment: 25_000,
    large_enrollment_bonus: 8.0,
    mid_enrollment: 10_000,
    mid_enrollment_bonus: 4.0,
    liberal_arts_aligned_bonus: 15.0,
    liberal_arts_flexibility_bonus: 7.0,
    variance_upper: 4,
    score_cap: 99,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BonusTable {
    pub base_score: f64,
    pub keyword_per_match: f64,
    pub keyword_cap: f64,
    /// Graduation term applies only above this rate.
    pub graduation_floor: f64,
    pub graduation_pivot: f64,
    pub graduation_divisor: f64,
    pub graduation_cap: f64,
    pub stem_floor: f64,
    pub stem_divisor: f64,
    pub stem_cap: f64,
    pub endowment_floor_million: f64,
    pub endowment_bonus: f64,
    pub research_intensive_bonus: f64,
    pub large_enrollment: u64,
    pub large_enrollment_bonus: f64,
    pub mid_enrollment: u64,
    pub mid_enrollment_bonus: f64,
    pub liberal_arts_aligned_bonus: f64,
    pub liberal_arts_flexibility_bonus: f64,
    /// Exclusive upper bound of the random variance term.
    pub variance_upper: u32,
    pub score_cap: u8,
}

impl Default for BonusTable {
    fn default() -> Self {
        REFERENCE_BONUSES
    }
}

impl BonusTable {
    pub fn keyword_bonus(&self, overlap_count: usize) -> f64 {
        (overlap_count as f64 * self.keyword_per_match).min(self.keyword_cap)
    }

    pub fn graduation_bonus(&self, rate: Option<f64>) -> f64 {
        match rate {
            Some(rate) if rate > self.graduation_floor => ((rate - self.graduation_pivot)
                / self.graduation_divisor)
                .min(self.graduation_cap),
            _ => 0.0,
        }
    }

    /// `aligned` is whether the employer sits in a tech/engineering sector.
    pub fn stem_bonus(&self, stem_pct: Option<f64>, aligned: bool) -> f64 {
        match stem_pct {
            Some(pct) if aligned && pct > self.stem_floor => {
                ((pct - self.stem_floor) / self.stem_divisor).min(self.stem_cap)
            }
            _ => 0.0,
        }
    }

    pub fn endowment_bonus(&self, endowment_million: Option<f64>) -> f64 {
        match endowment_million {
            Some(e) if e > self.endowment_floor_million => self.endowment_bonus,
            _ => 0.0,
        }
    }

    /// Larger threshold wins; the two tiers never stack.
    pub fn enrollment_bonus(&self, total_students: u64) -> f64 {
        if total_students > self.large_enrollment {
            self.large_enrollment_bonus
        } else if total_students > self.mid_enrollment {
            self.mid_enrollment_bonus
        } else {
            0.0
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_bonus_saturates_at_cap() {
        let table = REFERENCE_BONUSES;
        assert_eq!(table.keyword_bonus(0), 0.0);
        assert_eq!(table.keyword_bonus(2), 30.0);
        assert_eq!(table.keyword_bonus(3), 45.0);
        assert_eq!(table.keyword_bonus(7), 45.0);
    }

    #[test]
    fn graduation_bonus_starts_above_floor_and_caps() {
        let table = REFERENCE_BONUSES;
        assert_eq!(table.graduation_bonus(None), 0.0);
        assert_eq!(table.graduation_bonus(Some(55.0)), 0.0);
        assert_eq!(table.graduation_bonus(Some(60.0)), 2.5);
        assert_eq!(table.graduation_bonus(Some(95.0)), 8.0);
    }

    #[test]
    fn stem_bonus_requires_sector_alignment() {
        let table = REFERENCE_BONUSES;
        assert_eq!(table.stem_bonus(Some(25.0), false), 0.0);
        assert_eq!(table.stem_bonus(Some(25.0), true), 5.0);
        assert_eq!(table.stem_bonus(Some(60.0), true), 10.0);
        assert_eq!(table.stem_bonus(Some(15.0), true), 0.0);
    }

    #[test]
    fn endowment_and_enrollment_tiers() {
        let table = REFERENCE_BONUSES;
        assert_eq!(table.endowment_bonus(Some(200.0)), 0.0);
        assert_eq!(table.endowment_bonus(Some(200.5)), 4.0);
        assert_eq!(table.enrollment_bonus(50_000), 8.0);
        assert_eq!(table.enrollment_bonus(12_000), 4.0);
        assert_eq!(table.enrollment_bonus(10_000), 0.0);
    }
}
