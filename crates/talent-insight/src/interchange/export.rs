use chrono::NaiveDate;
use html_escape::encode_text;

use crate::analytics::{AnalyticsSnapshot, AnalyticsView};
use crate::candidates::Candidate;

pub const WORD_MIME: &str = "application/msword";
const REPORT_TITLE: &str = "人才盘点分析报告";

const TABLE_STYLE: &str = "width: 100%; border-collapse: collapse; margin-bottom: 20px;";
const TH_STYLE: &str =
    "border: 1px solid #ddd; padding: 8px; background-color: #f2f2f2; text-align: left;";
const TD_STYLE: &str = "border: 1px solid #ddd; padding: 8px;";
const TITLE_STYLE: &str =
    "font-family: 'SimSun', serif; font-size: 24px; text-align: center; margin-bottom: 20px;";
const H2_STYLE: &str = "font-family: 'SimHei', sans-serif; font-size: 18px; color: #333; margin-top: 20px; border-left: 5px solid #4f46e5; padding-left: 10px;";
const H3_STYLE: &str = "font-size: 16px; font-weight: bold; margin-top: 10px;";

/// Rendered export ready to be written to disk or served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordDocument {
    pub file_name: String,
    pub content: String,
}

pub fn export_file_name(generated_on: NaiveDate) -> String {
    format!("{REPORT_TITLE}_{}.doc", generated_on.format("%Y-%m-%d"))
}

/// Pretty-printed JSON of one candidate, in the same shape the importer accepts.
pub fn candidate_json(candidate: &Candidate) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(candidate)
}

/// Render the overview plus the section for `view` as Word-compatible HTML.
///
/// Every interpolated value is HTML-escaped.
pub fn render_word_document(
    snapshot: &AnalyticsSnapshot,
    view: AnalyticsView,
    generated_on: NaiveDate,
) -> WordDocument {
    let date = generated_on.format("%Y-%m-%d").to_string();

    let mut content = String::from(
        "<html xmlns:o='urn:schemas-microsoft-com:office:office' \
         xmlns:w='urn:schemas-microsoft-com:office:word' \
         xmlns='http://www.w3.org/TR/REC-html40'>\n\
         <head><meta charset='utf-8'><title>分析报告</title></head>\n\
         <body style=\"font-family: 'SimSun', serif;\">\n",
    );
    content.push_str(&format!(
        "<h1 style=\"{TITLE_STYLE}\">{REPORT_TITLE}</h1>\n\
         <p style=\"text-align: center; color: #666;\">生成日期: {}</p>\n",
        encode_text(&date)
    ));
    content.push_str(&overview_section(snapshot));

    let body = match view {
        AnalyticsView::Enterprise => enterprise_section(snapshot),
        AnalyticsView::Training => training_section(snapshot),
        AnalyticsView::Review => review_section(snapshot),
    };
    content.push_str(&format!(
        "<h2 style=\"{H2_STYLE}\">二、{}</h2>\n",
        encode_text(view.title())
    ));
    content.push_str(&body);
    content.push_str("</body></html>");

    WordDocument {
        file_name: export_file_name(generated_on),
        content,
    }
}

fn cell(text: &str) -> String {
    format!("<td style=\"{TD_STYLE}\">{}</td>", encode_text(text))
}

fn strong_cell(text: &str) -> String {
    format!(
        "<td style=\"{TD_STYLE}\"><strong>{}</strong></td>",
        encode_text(text)
    )
}

fn header_row(headings: &[&str]) -> String {
    let cells: String = headings
        .iter()
        .map(|heading| format!("<th style=\"{TH_STYLE}\">{heading}</th>"))
        .collect();
    format!("<thead><tr>{cells}</tr></thead>\n")
}

fn bullet_list(heading: &str, items: &[String]) -> String {
    let entries: String = items
        .iter()
        .map(|item| format!("<li>{}</li>\n", encode_text(item)))
        .collect();
    format!("<h3 style=\"{H3_STYLE}\">{heading}</h3>\n<ul>\n{entries}</ul>\n")
}

fn overview_section(snapshot: &AnalyticsSnapshot) -> String {
    let overview = &snapshot.overview;
    let rows = [
        ("候选人总数", format!("{} 人", overview.total_candidates)),
        (
            "平均系统加固实操分",
            format!("{} 分", overview.avg_system_hardening_practice),
        ),
        ("待提升项总数", format!("{} 项", overview.needs_improvement_count)),
    ];
    let body: String = rows
        .iter()
        .map(|(label, value)| format!("<tr>{}{}</tr>\n", strong_cell(label), cell(value)))
        .collect();

    format!(
        "<h2 style=\"{H2_STYLE}\">一、总体概览</h2>\n<table style=\"{TABLE_STYLE}\">\n{body}</table>\n"
    )
}

fn enterprise_section(snapshot: &AnalyticsSnapshot) -> String {
    let section = &snapshot.distribution;
    let rows: String = section
        .entries
        .iter()
        .map(|entry| {
            format!(
                "<tr>{}{}{}</tr>\n",
                cell(entry.label),
                cell(&entry.count.to_string()),
                cell(&format!("{}%", entry.share_pct))
            )
        })
        .collect();

    format!(
        "<table style=\"{TABLE_STYLE}\">\n{}<tbody>\n{rows}</tbody></table>\n{}",
        header_row(&["梯队分类", "人数", "占比"]),
        bullet_list("企业洞察 (Insights):", &section.insights.observations)
    )
}

fn training_section(snapshot: &AnalyticsSnapshot) -> String {
    let section = &snapshot.weakness;
    let ranking: String = section
        .ranking
        .iter()
        .map(|entry| {
            let color = if entry.needs_improvement() {
                "red"
            } else {
                "green"
            };
            format!(
                "<tr>{}{}<td style=\"{TD_STYLE} color: {color};\">{}</td></tr>\n",
                cell(entry.category),
                cell(&entry.average_score.to_string()),
                encode_text(entry.status_label())
            )
        })
        .collect();
    let plan: String = section
        .learning_plan
        .iter()
        .map(|item| {
            format!(
                "<tr>{}{}{}</tr>\n",
                strong_cell(item.category),
                cell(item.steps),
                cell(item.resources)
            )
        })
        .collect();

    format!(
        "<table style=\"{TABLE_STYLE}\">\n{}<tbody>\n{ranking}</tbody></table>\n{}\
         <h3 style=\"{H3_STYLE}\">专项提升计划:</h3>\n<table style=\"{TABLE_STYLE}\">\n{}<tbody>\n{plan}</tbody></table>\n",
        header_row(&["技能维度", "平均得分", "状态"]),
        bullet_list("教学建议 (Suggestions):", &section.insights.observations),
        header_row(&["技能项", "建议步骤", "推荐资源"]),
    )
}

fn review_section(snapshot: &AnalyticsSnapshot) -> String {
    let section = &snapshot.quadrant;
    let rows: String = section
        .placements
        .iter()
        .map(|placement| {
            format!(
                "<tr>{}{}{}{}{}</tr>\n",
                cell(&placement.name),
                cell(&placement.role),
                cell(&placement.theory_avg.to_string()),
                cell(&placement.practice_avg.to_string()),
                strong_cell(placement.quadrant_label)
            )
        })
        .collect();

    format!(
        "<p>基于“理论基础”与“实操能力”双维坐标的人才分类盘点。</p>\n\
         <table style=\"{TABLE_STYLE}\">\n{}<tbody>\n{rows}</tbody></table>\n{}",
        header_row(&["姓名", "职位", "理论平均分", "实操平均分", "盘点分类"]),
        bullet_list("管理建议 (Strategies):", &section.insights.observations)
    )
}
