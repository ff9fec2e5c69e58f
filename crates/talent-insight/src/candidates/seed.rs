use super::avatar::builtin_avatar;
use super::domain::{Candidate, CandidateId, Recommendation, SkillScore};

fn recommendation(direction: &str, steps: &str, resources: &str) -> Recommendation {
    Recommendation {
        direction: direction.to_string(),
        steps: steps.to_string(),
        resources: resources.to_string(),
    }
}

fn reference_scores() -> Vec<SkillScore> {
    vec![
        SkillScore::theory("安全监测", 65.0),
        SkillScore::theory("系统加固", 87.0),
        SkillScore::theory("应急响应", 85.0),
        SkillScore::theory("溯源取证", 87.0),
        SkillScore::theory("渗透测试", 70.0),
        SkillScore::theory("业务理解", 80.0),
        SkillScore::practice("安全监测", 33.0),
        SkillScore::practice("系统加固", 100.0),
        SkillScore::practice("应急响应", 71.0),
        SkillScore::practice("溯源取证", 0.0),
        SkillScore::practice("渗透测试", 0.0),
    ]
}

/// Reference profile the other demo candidates are derived from.
pub fn reference_candidate() -> Candidate {
    Candidate {
        id: CandidateId::from("c-001"),
        name: "李白".to_string(),
        role: "高级安全工程师".to_string(),
        avatar: builtin_avatar(0),
        updated_at: "2025-12-01 12:18:00".to_string(),
        summary: "候选人实操能力在系统加固和应急响应表现突出，但溯源取证与渗透测试实操能力薄弱。理论基础较均衡，业务理解较强，但安全监测理论需提升。".to_string(),
        detailed_analysis: "实操能力权重较高，系统加固满分、应急响应得分71%，但溯源取证和渗透测试实操为零，需重点加强。理论方面，业务理解达80%，应急响应理论85%，但安全监测理论仅65%，建议针对性补足。".to_string(),
        scores: reference_scores(),
        recommendations: vec![
            recommendation(
                "提升渗透测试实操能力",
                "通过CTF实战练习，学习渗透测试工具与方法",
                "《渗透测试的艺术》、CTFtime在线平台",
            ),
            recommendation(
                "加强溯源取证技能",
                "学习日志分析技术，掌握取证工具（如Autopsy）",
                "《计算机取证与调查》、Autopsy官方教程",
            ),
            recommendation(
                "强化安全监测理论与实操结合",
                "分析典型安全事件案例，模拟监测场景演练",
                "《网络安全事件应急响应指南》、阿里云安全监测课程",
            ),
            recommendation(
                "提高安全监测实操水平",
                "配置IDS/IPS系统，参与漏洞扫描实践",
                "《入侵检测技术与实践》、Kali Linux实操手册",
            ),
        ],
    }
}

fn adjust_scores(offsets: &[f64], floor: f64) -> Vec<SkillScore> {
    reference_scores()
        .into_iter()
        .zip(offsets.iter().cycle())
        .map(|(score, offset)| SkillScore {
            score: (score.score + offset).clamp(floor, 100.0),
            ..score
        })
        .collect()
}

/// Demo candidates loaded at startup when seeding is enabled.
pub fn demo_candidates() -> Vec<Candidate> {
    let reference = reference_candidate();

    let architect = Candidate {
        id: CandidateId::from("c-002"),
        name: "杜甫".to_string(),
        role: "安全架构师".to_string(),
        avatar: builtin_avatar(2),
        summary: "理论体系非常扎实，架构设计能力强。实操方面偏向防御体系建设，渗透测试能力一般。"
            .to_string(),
        scores: adjust_scores(
            &[12.0, 6.0, -4.0, 9.0, 15.0, 11.0, 18.0, -7.0, 5.0, 14.0, -3.0],
            40.0,
        ),
        ..reference.clone()
    };

    let analyst = Candidate {
        id: CandidateId::from("c-003"),
        name: "王维".to_string(),
        role: "初级安全分析师".to_string(),
        avatar: builtin_avatar(3),
        summary: "潜力股，基础知识牢固，缺乏实战经验，需要更多项目历练。".to_string(),
        scores: adjust_scores(&[-20.0], 20.0),
        ..reference.clone()
    };

    vec![reference, architect, analyst]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_set_has_three_distinct_candidates() {
        let candidates = demo_candidates();
        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[0].name, "李白");
        assert_ne!(candidates[1].id, candidates[2].id);
    }

    #[test]
    fn derived_scores_respect_floors() {
        let candidates = demo_candidates();
        assert!(candidates[1]
            .scores
            .iter()
            .all(|score| (40.0..=100.0).contains(&score.score)));
        assert!(candidates[2]
            .scores
            .iter()
            .all(|score| (20.0..=100.0).contains(&score.score)));
    }
}
