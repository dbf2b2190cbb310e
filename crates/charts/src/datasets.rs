//! Literal figures shown on the dashboard's statistics and agriculture pages.

use serde::Serialize;

use crate::datum::ChartDatum;
use crate::series::{ChartError, Series, SeriesSet};

pub const OIL_COLOR: &str = "#F39C12";
pub const GAS_COLOR: &str = "#3498DB";
pub const MINERALS_COLOR: &str = "#95A5A6";
pub const WATER_COLOR: &str = "#16A085";
pub const AGRICULTURE_COLOR: &str = "#27AE60";

/// Headline figure rendered as a card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    pub unit: String,
}

impl StatCard {
    fn new(label: &str, value: &str, unit: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            unit: unit.to_string(),
        }
    }
}

/// Share of national resource production, percent.
pub fn production_share() -> Vec<ChartDatum> {
    vec![
        ChartDatum::new("النفط الخام", 45.0, OIL_COLOR),
        ChartDatum::new("الغاز الطبيعي", 25.0, GAS_COLOR),
        ChartDatum::new("المعادن", 15.0, MINERALS_COLOR),
        ChartDatum::new("المياه الجوفية", 10.0, WATER_COLOR),
        ChartDatum::new("الموارد الزراعية", 5.0, AGRICULTURE_COLOR),
    ]
}

/// Annual production 2019-2023 for oil, gas and minerals.
pub fn yearly_production() -> Result<SeriesSet, ChartError> {
    SeriesSet::new(
        ["2019", "2020", "2021", "2022", "2023"]
            .map(String::from)
            .to_vec(),
        vec![
            Series::new("النفط", OIL_COLOR, vec![1200.0, 950.0, 1100.0, 1350.0, 1400.0]),
            Series::new("الغاز", GAS_COLOR, vec![850.0, 780.0, 820.0, 950.0, 980.0]),
            Series::new("المعادن", MINERALS_COLOR, vec![400.0, 380.0, 420.0, 450.0, 480.0]),
        ],
    )
}

/// Resource distribution across the four regions.
pub fn regional_distribution() -> Result<SeriesSet, ChartError> {
    SeriesSet::new(
        ["الشرق", "الغرب", "الجنوب", "الوسط"]
            .map(String::from)
            .to_vec(),
        vec![
            Series::new("النفط", OIL_COLOR, vec![60.0, 35.0, 20.0, 45.0]),
            Series::new("الغاز", GAS_COLOR, vec![40.0, 55.0, 25.0, 30.0]),
            Series::new("المعادن", MINERALS_COLOR, vec![30.0, 45.0, 60.0, 35.0]),
        ],
    )
}

/// Main crops by cultivated share, percent. Colors step around the hue wheel.
pub fn crop_shares() -> Vec<ChartDatum> {
    [
        ("القمح", 35.0),
        ("الشعير", 25.0),
        ("الزيتون", 15.0),
        ("التمور", 10.0),
        ("الخضروات", 15.0),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, percent))| ChartDatum::new(name, percent, format!("hsl({},70%,50%)", i * 60)))
    .collect()
}

pub fn agriculture_stats() -> Vec<StatCard> {
    vec![
        StatCard::new("المساحة الصالحة للزراعة", "1.75", "مليون هكتار"),
        StatCard::new("المساحة المستغلة فعلياً", "0.5", "مليون هكتار"),
        StatCard::new("نسبة الاستغلال", "28.5", "%"),
    ]
}

pub fn agriculture_challenges() -> Vec<&'static str> {
    vec![
        "شح المياه وتغير المناخ",
        "التصحر وتآكل التربة",
        "ضعف الاستثمار في التقنيات الحديثة",
        "الاعتماد على الأمطار الموسمية",
        "نقص العمالة الزراعية المؤهلة",
    ]
}

/// Headline figures under the statistics charts.
pub fn statistics_headline() -> Vec<StatCard> {
    vec![
        StatCard::new("برميل نفط/يوم", "1.4M", ""),
        StatCard::new("قدم³ غاز/يوم", "980M", ""),
        StatCard::new("طن معادن/سنة", "480K", ""),
        StatCard::new("م³ مياه/يوم", "2.5M", ""),
    ]
}

/// Titled figure with a one-line explanation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight {
    pub title: String,
    pub value: String,
    pub description: String,
}

impl Highlight {
    fn new(title: &str, value: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            value: value.to_string(),
            description: description.to_string(),
        }
    }
}

/// Overview cards, one per resource family.
pub fn key_resources() -> Vec<Highlight> {
    vec![
        Highlight::new(
            "النفط والغاز الطبيعي",
            "48.4 مليار برميل احتياطي مؤكد",
            "ليبيا تحتل المرتبة الأولى أفريقياً في احتياطيات النفط المؤكدة",
        ),
        Highlight::new(
            "الموارد المائية",
            "35,000 مليار متر مكعب",
            "خزان الحجر الرملي النوبي أكبر مصدر للمياه الجوفية في العالم",
        ),
        Highlight::new(
            "الثروات المعدنية",
            "أكثر من 20 نوع معدن",
            "احتياطيات كبيرة من الحديد والجبس والملح والبوتاسيوم",
        ),
        Highlight::new(
            "الموارد الزراعية",
            "1.75 مليون هكتار صالح للزراعة",
            "أراضي زراعية خصبة تمتد عبر الساحل والواحات الجنوبية",
        ),
    ]
}

pub fn achievements() -> Vec<Highlight> {
    vec![
        Highlight::new("التصدير العالمي", "9th", "مصدر للنفط عالمياً"),
        Highlight::new("فرص العمل", "500K+", "فرصة عمل في القطاع النفطي"),
        Highlight::new("جودة النفط", "42° API", "نفط خفيف عالي الجودة"),
        Highlight::new("نمو الإنتاج", "+15%", "نمو متوقع خلال 2024"),
    ]
}

/// Share of national figures carried by natural resources.
pub fn economic_impact() -> Vec<StatCard> {
    vec![
        StatCard::new("من عائدات التصدير", "95", "%"),
        StatCard::new("من الناتج المحلي الإجمالي", "60", "%"),
        StatCard::new("من الإيرادات الحكومية", "80", "%"),
    ]
}

/// Overview hero figures.
pub fn overview_stats() -> Vec<StatCard> {
    vec![
        StatCard::new("برميل نفط احتياطي", "48.4B", ""),
        StatCard::new("برميل إنتاج يومي", "1.4M", ""),
        StatCard::new("مليار م³ مياه جوفية", "35T", ""),
    ]
}

#[cfg(test)]
mod tests {
    use super::{
        achievements, crop_shares, economic_impact, key_resources, production_share,
        regional_distribution, statistics_headline, yearly_production,
    };
    use crate::statistics::Statistics;

    fn total(data: &[crate::ChartDatum]) -> f64 {
        Statistics::total(&data.iter().map(|d| d.value).collect::<Vec<_>>())
    }

    #[test]
    fn percentage_datasets_are_normalized() {
        assert_eq!(total(&production_share()), 100.0);
        assert_eq!(total(&crop_shares()), 100.0);
    }

    #[test]
    fn series_datasets_are_well_formed() {
        let years = yearly_production().unwrap();
        assert_eq!(years.categories().len(), 5);
        assert_eq!(years.max_value(), 1400.0);

        let regions = regional_distribution().unwrap();
        assert_eq!(regions.series().len(), 3);
        assert_eq!(regions.max_value(), 60.0);
    }

    #[test]
    fn static_cards_cover_every_page_section() {
        let cards = statistics_headline();
        let headline: Vec<&str> = cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(headline, vec!["1.4M", "980M", "480K", "2.5M"]);
        assert_eq!(key_resources().len(), 4);
        assert_eq!(achievements()[2].value, "42° API");
        assert_eq!(economic_impact().len(), 3);
    }

    #[test]
    fn crop_colors_step_by_sixty_degrees() {
        let crops = crop_shares();
        assert_eq!(crops[0].color, "hsl(0,70%,50%)");
        assert_eq!(crops[4].color, "hsl(240,70%,50%)");
    }
}
