use serde::Serialize;

/// Study plan attached to a skill category for the learning-plan view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainingResource {
    pub steps: &'static str,
    pub resources: &'static str,
}

/// One assessed skill axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub key: &'static str,
    /// Label stored in `SkillScore::category`.
    pub label: &'static str,
    pub theory_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training: Option<TrainingResource>,
}

/// Ordered category set shared by intake, analytics and export.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    categories: Vec<SkillCategory>,
}

pub const SYSTEM_HARDENING: &str = "系统加固";

pub const FALLBACK_TRAINING_STEPS: &str = "建议加强基础理论学习与实操。";
pub const FALLBACK_TRAINING_RESOURCES: &str = "内部培训文档";

impl SkillCatalog {
    pub fn standard() -> Self {
        Self {
            categories: standard_categories(),
        }
    }

    pub fn from_categories(categories: Vec<SkillCategory>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn by_label(&self, label: &str) -> Option<&SkillCategory> {
        self.categories
            .iter()
            .find(|category| category.label == label)
    }

    pub fn training_steps(&self, label: &str) -> &'static str {
        self.by_label(label)
            .and_then(|category| category.training.as_ref())
            .map(|training| training.steps)
            .unwrap_or(FALLBACK_TRAINING_STEPS)
    }

    pub fn training_resources(&self, label: &str) -> &'static str {
        self.by_label(label)
            .and_then(|category| category.training.as_ref())
            .map(|training| training.resources)
            .unwrap_or(FALLBACK_TRAINING_RESOURCES)
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_categories() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            key: "security_monitoring",
            label: "安全监测",
            theory_only: false,
            training: Some(TrainingResource {
                steps: "重点加强日志分析、流量监控与威胁情报解读能力的训练，建议开展定期监测演练。",
                resources: "《安全监测实战指南》、Elastic Stack 官方文档、阿里云安全中心最佳实践",
            }),
        },
        SkillCategory {
            key: "system_hardening",
            label: SYSTEM_HARDENING,
            theory_only: false,
            training: Some(TrainingResource {
                steps: "深入学习操作系统（Linux/Windows）安全配置、服务硬化与基线检查标准。",
                resources: "CIS Benchmarks、Linux Hardening Guide、Windows Server 安全配置手册",
            }),
        },
        SkillCategory {
            key: "incident_response",
            label: "应急响应",
            theory_only: false,
            training: Some(TrainingResource {
                steps: "通过模拟勒索病毒、挖矿木马等常见安全事件，演练标准处置流程（PDCERF）。",
                resources: "《应急响应现场手册》、典型安全事件案例库、应急响应工具包",
            }),
        },
        SkillCategory {
            key: "forensics",
            label: "溯源取证",
            theory_only: false,
            training: Some(TrainingResource {
                steps: "掌握内存取证、磁盘镜像分析技术，学习使用各类取证工具还原攻击路径。",
                resources: "Volatility 教程、Wireshark 高级流量分析、Autopsy 用户指南",
            }),
        },
        SkillCategory {
            key: "penetration_testing",
            label: "渗透测试",
            theory_only: false,
            training: Some(TrainingResource {
                steps: "开展靶场实战 (HTB/VulnHub)，系统学习内网渗透、提权与免杀技术，提升攻击思维。",
                resources: "OWASP Top 10、Kali Linux 工具集、《渗透测试的艺术》",
            }),
        },
        SkillCategory {
            key: "business_understanding",
            label: "业务理解",
            theory_only: true,
            training: Some(TrainingResource {
                steps: "深入分析常见业务逻辑漏洞（如越权、并发），学习业务风控策略与SDLC流程。",
                resources: "业务安全白皮书、企业SDLC流程规范、SRC 漏洞挖掘案例",
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_lists_six_categories_in_order() {
        let catalog = SkillCatalog::standard();
        let labels: Vec<_> = catalog.categories().iter().map(|c| c.label).collect();
        assert_eq!(
            labels,
            vec!["安全监测", "系统加固", "应急响应", "溯源取证", "渗透测试", "业务理解"]
        );
        assert!(catalog
            .categories()
            .iter()
            .all(|category| category.training.is_some()));
    }

    #[test]
    fn only_business_understanding_is_theory_only() {
        let catalog = SkillCatalog::standard();
        let theory_only: Vec<_> = catalog
            .categories()
            .iter()
            .filter(|category| category.theory_only)
            .map(|category| category.key)
            .collect();
        assert_eq!(theory_only, vec!["business_understanding"]);
    }

    #[test]
    fn unknown_labels_fall_back_to_generic_training() {
        let catalog = SkillCatalog::standard();
        assert_eq!(catalog.training_steps("云安全"), FALLBACK_TRAINING_STEPS);
        assert_eq!(
            catalog.training_resources("云安全"),
            FALLBACK_TRAINING_RESOURCES
        );
        assert!(catalog.training_steps("渗透测试").contains("靶场"));
    }
}
