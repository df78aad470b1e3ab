//! The ISO 27001:2022 audit practice deck.

use super::content::{
    Block, CalloutKind, Card, Inline, accent, callout, paragraph, strong, text,
};
use super::{Deck, SlideRecord};
use crate::icons::Icon;

const EVIDENCE_TITLE: &str = "必備佐證 (Evidence)";
const TRAP_TITLE: &str = "常見缺失陷阱";

/// Layout shared by the clause and Annex A slides: the intent of the
/// requirement, what the auditor checks next to the evidence they expect,
/// then the usual findings.
struct AuditPage {
    id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    icon: Icon,
    intent_title: &'static str,
    intent: Vec<Inline>,
    audit_title: &'static str,
    audit: Vec<Vec<Inline>>,
    evidence: Vec<Vec<Inline>>,
    traps: &'static [&'static str],
}

impl From<AuditPage> for SlideRecord {
    fn from(page: AuditPage) -> Self {
        let traps = page.traps.iter().map(|line| paragraph(vec![text(line)])).collect();
        SlideRecord {
            id: page.id.to_string(),
            title: page.title.to_string(),
            subtitle: page.subtitle.to_string(),
            icon: page.icon,
            content: vec![
                callout(CalloutKind::Normal, page.intent_title, vec![paragraph(page.intent)]),
                Block::Columns(vec![
                    vec![callout(
                        CalloutKind::Audit,
                        page.audit_title,
                        vec![Block::Bullets(page.audit)],
                    )],
                    vec![callout(
                        CalloutKind::Evidence,
                        EVIDENCE_TITLE,
                        vec![Block::Bullets(page.evidence)],
                    )],
                ]),
                callout(CalloutKind::Trap, TRAP_TITLE, traps),
            ],
        }
    }
}

fn plain(s: &str) -> Vec<Inline> {
    vec![text(s)]
}

fn keyed(key: &str, rest: &str) -> Vec<Inline> {
    if rest.is_empty() {
        vec![strong(key)]
    } else {
        vec![strong(key), text(rest)]
    }
}

fn card(icon: Option<Icon>, title: &str, body: Vec<Block>) -> Card {
    Card {
        icon,
        title: title.to_string(),
        body,
    }
}

fn intro() -> SlideRecord {
    SlideRecord {
        id: "intro".to_string(),
        title: "ISO 27001:2022 稽核實務解析".to_string(),
        subtitle: "顧問與稽核員視角：條文要求 vs. 客觀證據".to_string(),
        icon: Icon::ShieldCheck,
        content: vec![
            Block::Lead {
                icon: Some(Icon::ShieldCheck),
                headline: plain("如何應對 ISO 27001 稽核？"),
                paragraphs: vec![
                    plain("不僅是「做了什麼」，更是「留下了什麼紀錄」。"),
                    vec![
                        text("本簡報將帶您從 "),
                        accent("PDCA"),
                        text(" 循環檢視稽核重點。"),
                    ],
                ],
            },
            Block::Cards(vec![
                card(
                    None,
                    "說寫做一致",
                    vec![paragraph(plain("Say what you do, Do what you say"))],
                ),
                card(
                    None,
                    "可追溯性",
                    vec![paragraph(plain("Traceability of Evidence"))],
                ),
                card(
                    None,
                    "風險導向",
                    vec![paragraph(plain("Risk-Based Thinking"))],
                ),
            ]),
        ],
    }
}

fn clause_4() -> SlideRecord {
    AuditPage {
        id: "clause-4",
        title: "Clause 4: 組織全景",
        subtitle: "Context of the Organization - 範圍與利害關係人",
        icon: Icon::BookOpen,
        intent_title: "條文精神",
        intent: plain("確定 ISMS 的邊界（Scope）以及誰會影響資訊安全（利害關係人）。這是整個 ISMS 的地基。"),
        audit_title: "稽核員在找什麼 (Audit Trail)",
        audit: vec![
            plain("是否清晰定義了 ISMS 驗證範圍？（包含實體位置、部門、系統）"),
            plain("是否有文件化的「內外部議題」清單？（SWOT 分析或 PEST 分析）"),
            plain("利害關係人（客戶、主管機關、員工）的需求是否被識別並轉化為具體要求？"),
        ],
        evidence: vec![
            keyed("ISMS 範圍說明書", " (Scope Statement)"),
            keyed("利害關係人鑑別表", " (包含對應的資安要求)"),
            keyed("組織全景分析報告", " (如年度 SWOT 分析會議紀錄)"),
        ],
        traps: &[
            "範圍定義不清：例如雲端服務供應商未將「雲端平台管理」納入範圍，僅驗證「辦公室行政流程」。",
            "或者利害關係人需求過於籠統，未鑑別出具體的法律法規要求。",
        ],
    }
    .into()
}

fn clause_5() -> SlideRecord {
    AuditPage {
        id: "clause-5",
        title: "Clause 5: 領導統御",
        subtitle: "Leadership - 政策與角色權責",
        icon: Icon::Users,
        intent_title: "條文精神",
        intent: plain("Top Management 不能只是掛名，必須展現承諾。資安政策必須由高層核准並傳達。"),
        audit_title: "稽核員怎麼問",
        audit: vec![
            plain("「請問資安政策是誰核准的？何時核准？」"),
            plain("「資安長/資安主管的任命書在哪裡？」"),
            plain("「管理階層如何確保資源（預算、人力）足夠？」"),
        ],
        evidence: vec![
            keyed("資安政策文件", "（需有最高主管簽核日期）"),
            vec![
                strong("組織架構圖"),
                text("與"),
                strong("角色職責說明書"),
                text(" (Job Description)"),
            ],
            plain("管理階層參與會議的簽到表或郵件紀錄"),
        ],
        traps: &[
            "政策發布日期久遠未經審查。",
            "資安推動小組成員不知道自己的具體職責（例如：不知道自己是緊急應變小組成員）。",
        ],
    }
    .into()
}

fn clause_6() -> SlideRecord {
    AuditPage {
        id: "clause-6",
        title: "Clause 6: 規劃 (風險管理)",
        subtitle: "Planning - 風險評鑑與處置 (最核心章節)",
        icon: Icon::BrainCircuit,
        intent_title: "條文精神",
        intent: plain("ISMS 是基於風險的系統。必須有一套方法論來識別風險，並決定如何處理風險 (SoA)。"),
        audit_title: "稽核重點 (Audit Trail)",
        audit: vec![
            plain("風險評鑑方法論是否包含「機密性、完整性、可用性 (CIA)」？"),
            plain("是否定義了「風險接受準則」？(什麼等級的風險要處理？)"),
            keyed("適用性聲明書 (SoA)", " 是否連結到 Annex A 控制項，並解釋排除理由？"),
        ],
        evidence: vec![
            keyed("資產盤點表", " (Information Asset Inventory)"),
            keyed("風險評鑑報告", " (Risk Assessment Report)"),
            keyed("風險處置計畫", " (Risk Treatment Plan, RTP)"),
            keyed("適用性聲明書", " (Statement of Applicability, SoA)"),
        ],
        traps: &[
            "SoA 中標示「不適用」的控制項理由不充分（例如：宣稱無委外開發，但實際上有請廠商維護網站）。",
            "風險評鑑流於形式，每年都複製貼上，未反映實際威脅變化（如勒索軟體）。",
        ],
    }
    .into()
}

fn clause_7() -> SlideRecord {
    AuditPage {
        id: "clause-7",
        title: "Clause 7: 支援",
        subtitle: "Support - 資源、能力、認知、溝通、文件化資訊",
        icon: Icon::Users,
        intent_title: "條文精神",
        intent: plain("確保人員有能力執行資安工作，且所有人都具備資安意識。同時規範文件的產生與控制。"),
        audit_title: "稽核員怎麼查",
        audit: vec![
            plain("隨機抽問員工：「你知道公司的資安政策嗎？電腦中毒怎麼辦？」"),
            plain("檢查新進員工與在職員工的資安教育訓練紀錄。"),
            plain("檢查過期文件是否被誤用？文件版本是否最新？"),
        ],
        evidence: vec![
            keyed("教育訓練計畫與紀錄", "（簽到表、測驗卷、證書）"),
            keyed("保密協議 (NDA)", " 簽署紀錄"),
            plain("文件總覽表 (Master List) 與 DCC 文件管制作業"),
        ],
        traps: &[
            "員工雖有簽到但考試不及格無補考紀錄。",
            "工程師使用舊版 SOP 操作系統。",
            "離職員工帳號未及時移除（這同時也是 Clause 9 & Annex A 的重點）。",
        ],
    }
    .into()
}

fn clause_8() -> SlideRecord {
    AuditPage {
        id: "clause-8",
        title: "Clause 8: 營運",
        subtitle: "Operation - 執行風險評鑑與控制",
        icon: Icon::Activity,
        intent_title: "條文精神",
        intent: plain("做你所寫的 (Do what you say)。執行 Clause 6 規劃的計畫，並控制變更。"),
        audit_title: "稽核重點 (Audit Trail)",
        audit: vec![
            plain("風險評鑑是否定期執行？(Planned intervals)"),
            plain("重大變更（如新系統上線、搬遷）時，是否重新評估風險？"),
            plain("委外流程是否受控？"),
        ],
        evidence: vec![
            plain("年度風險再評估紀錄"),
            plain("變更管理單 (Change Request) 及其資安審核紀錄"),
            plain("專案開發過程中的資安檢核點紀錄"),
        ],
        traps: &[
            "變更管理程序有寫，但實際系統修改直接由工程師上線，無測試與核准紀錄。",
            "導入新技術（如 AI 輔助編碼）未進行風險評估。",
        ],
    }
    .into()
}

fn clause_9() -> SlideRecord {
    AuditPage {
        id: "clause-9",
        title: "Clause 9: 績效評估",
        subtitle: "Performance Evaluation - 監控、內部稽核、管審會",
        icon: Icon::TrendingUp,
        intent_title: "條文精神",
        intent: plain("檢查 ISMS 有效性。透過監控數據、內部稽核與管理階層審查來確認。"),
        audit_title: "稽核員的必查項目",
        audit: vec![
            plain("如何量測資安目標達成率？(KPIs)"),
            plain("內部稽核員是否具備資格？是否球員兼裁判？"),
            plain("管理階層審查會議是否討論了「持續改善」與「資源需求」？"),
        ],
        evidence: vec![
            keyed("資安目標達成狀況統計表", ""),
            keyed("內部稽核計畫、報告、缺失單", ""),
            keyed("管理階層審查會議紀錄", " (Management Review Minutes)"),
        ],
        traps: &[
            "內部稽核發現 0 缺失（這通常不合理，稽核員會挑戰稽核深度）。",
            "管理審查會議紀錄流於形式，沒有高階主管的具體裁示或決策。",
        ],
    }
    .into()
}

fn clause_10() -> SlideRecord {
    AuditPage {
        id: "clause-10",
        title: "Clause 10: 改善",
        subtitle: "Improvement - 持續改善與不符合事項矯正",
        icon: Icon::CheckCircle,
        intent_title: "條文精神",
        intent: plain("發生問題不可怕，可怕的是沒有根因分析 (Root Cause Analysis) 與預防再發。"),
        audit_title: "稽核員怎麼看",
        audit: vec![
            plain("看到資安事件或內稽缺失後，是否有開立矯正措施單 (CAR)？"),
            plain("是否真的找到「根本原因」？還是只處理表面？"),
            plain("改善措施執行後，是否有驗證其有效性？"),
        ],
        evidence: vec![
            keyed("矯正預防措施單 (C/P Action List)", ""),
            plain("資安事件檢討報告"),
            plain("持續改善計畫追蹤表"),
        ],
        traps: &[
            "所有缺失的矯正措施都是「加強教育訓練」（這通常不是根本解決之道）。",
            "矯正措施單長期未結案（Open status），且無合理展延理由。",
        ],
    }
    .into()
}

fn annex_intro() -> SlideRecord {
    let theme = |icon: Icon, title: &str, summary: &str| {
        card(Some(icon), title, vec![paragraph(plain(summary))])
    };
    SlideRecord {
        id: "annex-intro".to_string(),
        title: "附錄 A (Annex A) 概覽".to_string(),
        subtitle: "2022 年版架構：93 個控制項、4 大主題 (Themes)".to_string(),
        icon: Icon::LayoutGrid,
        content: vec![
            callout(
                CalloutKind::Normal,
                "結構變化 (2013 vs 2022)",
                vec![paragraph(vec![
                    text("ISO 27001:2022 將原有的 14 個領域 (Domains) 整併為 "),
                    accent("4 大主題 (Themes)"),
                    text("，更加直觀且現代化。"),
                ])],
            ),
            Block::Cards(vec![
                theme(
                    Icon::Briefcase,
                    "1. 組織 (Organizational)",
                    "37 個控制項。涉及政策、管理面、雲端服務。",
                ),
                theme(
                    Icon::Users,
                    "2. 人員 (People)",
                    "8 個控制項。涉及教育訓練、背景調查、遠距工作。",
                ),
                theme(
                    Icon::Building,
                    "3. 實體 (Physical)",
                    "14 個控制項。涉及門禁監控、設備保護。",
                ),
                theme(
                    Icon::Cpu,
                    "4. 技術 (Technological)",
                    "34 個控制項。涉及網路安全、加密、備份、日誌。",
                ),
            ]),
            callout(
                CalloutKind::Audit,
                "稽核新焦點 (New Controls)",
                vec![Block::Bullets(vec![
                    keyed("威脅情資 (Threat Intelligence)", "：是否主動收集與分析？"),
                    keyed(
                        "雲端服務資安 (Information security for use of cloud services)",
                        "：責任分界？",
                    ),
                    keyed(
                        "ICT 營運持續 (ICT readiness for business continuity)",
                        "：RTO/RPO？",
                    ),
                ])],
            ),
        ],
    }
}

fn annex_org() -> SlideRecord {
    AuditPage {
        id: "annex-org",
        title: "A.5 組織控制 (Organizational)",
        subtitle: "政策、雲端、情資、供應商管理",
        icon: Icon::Briefcase,
        intent_title: "核心精神",
        intent: plain("涵蓋管理層面的控制措施，確保資安政策的落實與外部關係的管理。"),
        audit_title: "稽核員必問 (Audit Trail)",
        audit: vec![
            keyed(
                "雲端服務 (A.5.23)",
                "：如何管理 AWS/Azure/GCP 權限？是否有審查雲端供應商的合規性？",
            ),
            keyed(
                "威脅情資 (A.5.7)",
                "：除了看新聞，公司如何系統性地收集與分析情資？",
            ),
            keyed(
                "供應商管理 (A.5.19-22)",
                "：委外合約是否有包含 SLA 與資安條款？",
            ),
        ],
        evidence: vec![
            keyed("雲端服務使用規範與清冊", ""),
            keyed("供應商資安評估表/稽核報告", ""),
            keyed("資產清冊", " (需標註擁有者 Owner)"),
        ],
        traps: &[
            "使用免費的雲端工具 (如 Google Drive, Dropbox) 傳輸公務資料，卻未列入納管範圍。",
            "資產清冊未定期更新，離職員工的筆電仍列在清冊中。",
        ],
    }
    .into()
}

fn annex_people() -> SlideRecord {
    AuditPage {
        id: "annex-people",
        title: "A.6 人員控制 (People)",
        subtitle: "教育訓練、背景調查、遠距工作",
        icon: Icon::Users,
        intent_title: "核心精神",
        intent: plain("人是資安最脆弱的一環。重點在於提升意識與管理「不在辦公室」時的風險。"),
        audit_title: "稽核員必問 (Audit Trail)",
        audit: vec![
            keyed(
                "遠距工作 (A.6.7)",
                "：在家工作的 VPN 連線是否安全？是否有禁止家人使用公務電腦？",
            ),
            keyed("保密協議 (A.6.6)", "：合作廠商或短期人員是否簽署 NDA？"),
            keyed(
                "資安意識 (A.6.3)",
                "：是否有針對不同職位 (如開發者、HR) 進行差異化訓練？",
            ),
        ],
        evidence: vec![
            keyed("遠距辦公/居家上班管理辦法", ""),
            keyed("員工與外部人員保密協議 (NDA)", ""),
            keyed("社交工程演練報告", " (釣魚信測試)"),
        ],
        traps: &[
            "雖然有遠距辦公規範，但稽核時發現員工在家使用未經核准的軟體 (如 TeamViewer)。",
            "社交工程演練點擊率高，但後續沒有針對點擊人員進行加強訓練。",
        ],
    }
    .into()
}

fn annex_physical() -> SlideRecord {
    AuditPage {
        id: "annex-physical",
        title: "A.7 實體控制 (Physical)",
        subtitle: "安全區域、設備保護、桌面淨空",
        icon: Icon::Building,
        intent_title: "核心精神",
        intent: plain("防止未經授權的實體存取、損害和干擾。包含辦公室與機房安全。"),
        audit_title: "稽核員必問 (Audit Trail)",
        audit: vec![
            keyed(
                "實體安全監控 (A.7.4)",
                "：CCTV 保存時間是否符合規定？是否有死角？",
            ),
            keyed(
                "桌面與螢幕淨空 (A.7.7)",
                "：(稽核員會現場走動) 離開座位是否鎖定螢幕？桌上是否有密碼便利貼？",
            ),
            keyed("設備維護 (A.7.13)", "：UPS、冷氣、發電機是否定期保養？"),
        ],
        evidence: vec![
            keyed("機房進出管制紀錄", " (Access Logs)"),
            keyed("CCTV 運作檢查紀錄", ""),
            keyed("設備定期維護保養單", ""),
        ],
        traps: &[
            "機房內堆放紙箱、易燃物 (違反 A.7.10 儲存媒體、A.7.2 實體進入)。",
            "白板上留有系統架構圖或帳號密碼未擦除。",
        ],
    }
    .into()
}

fn annex_tech() -> SlideRecord {
    AuditPage {
        id: "annex-tech",
        title: "A.8 技術控制 (Technological)",
        subtitle: "網路、加密、備份、日誌、防惡意軟體",
        icon: Icon::Server,
        intent_title: "核心精神",
        intent: plain("技術層面的防禦措施。這是項目最多、技術含量最高的主題。"),
        audit_title: "稽核員必問 (Audit Trail)",
        audit: vec![
            keyed(
                "備份 (A.8.24)",
                "：不僅看備份成功紀錄，更要看「還原測試」紀錄。",
            ),
            keyed(
                "日誌 (A.8.15)",
                "：Log 是否有防篡改機制？是否有定期審閱 Log？",
            ),
            keyed("技術弱點管理 (A.8.8)", "：弱掃發現的高風險漏洞多久修補？"),
            keyed("資料外洩防護 (A.8.12)", "：(New) 如何偵測敏感資料外流？"),
        ],
        evidence: vec![
            keyed("備份還原測試報告", ""),
            keyed("弱點掃描與修補複測報告", ""),
            keyed("防火牆規則審查紀錄", ""),
            keyed("系統日誌 (Log) 審查紀錄", ""),
        ],
        traps: &[
            "測試環境使用真實個資進行測試 (違反 A.8.31 測試資料)。",
            "特權帳號 (Admin) 的操作行為沒有被獨立記錄或監控。",
        ],
    }
    .into()
}

fn conclusion() -> SlideRecord {
    SlideRecord {
        id: "conclusion".to_string(),
        title: "總結：顧問的建議".to_string(),
        subtitle: "準備稽核的心法".to_string(),
        icon: Icon::Lock,
        content: vec![
            Block::Cards(vec![
                card(
                    None,
                    "給受稽方的建議",
                    vec![Block::Bullets(vec![
                        keyed("誠實為上", "：不要試圖欺騙稽核員，誠實展現紀錄。"),
                        keyed(
                            "不要過度解釋",
                            "：問什麼答什麼，多餘的解釋常引發新的稽核路徑。",
                        ),
                        keyed(
                            "展現PDCA",
                            "：即使有缺失，若能展現已發現並正在改善中，通常能獲得認可。",
                        ),
                    ])],
                ),
                card(
                    None,
                    "文件準備口訣",
                    vec![Block::Bullets(vec![
                        keyed("文", "：程序書 (Procedure) 是否最新？"),
                        keyed("表", "：表單 (Form) 是否落實填寫？"),
                        keyed("管", "：紀錄 (Record) 是否妥善保存？"),
                        keyed("查", "：是否有定期檢查與覆核？"),
                    ])],
                ),
            ]),
            Block::Quote {
                text: "\"Security is a process, not a product.\"".to_string(),
                caption: Some("稽核的目的是協助組織持續強化體質，而非單純找碴。".to_string()),
            },
        ],
    }
}

pub(super) fn deck() -> Deck {
    Deck {
        slides: vec![
            intro(),
            clause_4(),
            clause_5(),
            clause_6(),
            clause_7(),
            clause_8(),
            clause_9(),
            clause_10(),
            annex_intro(),
            annex_org(),
            annex_people(),
            annex_physical(),
            annex_tech(),
            conclusion(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_deck_validation() {
        let slides: Vec<_> = deck().iter().cloned().collect();
        assert!(Deck::new(slides).is_ok());
    }

    #[test]
    fn audit_pages_have_four_callouts() {
        let slide = clause_6();
        let kinds: Vec<CalloutKind> = collect_kinds(&slide.content);
        assert_eq!(
            kinds,
            vec![
                CalloutKind::Normal,
                CalloutKind::Audit,
                CalloutKind::Evidence,
                CalloutKind::Trap
            ]
        );
    }

    fn collect_kinds(blocks: &[Block]) -> Vec<CalloutKind> {
        let mut kinds = Vec::new();
        for block in blocks {
            match block {
                Block::Callout { kind, body, .. } => {
                    kinds.push(*kind);
                    kinds.extend(collect_kinds(body));
                }
                Block::Columns(columns) => {
                    for column in columns {
                        kinds.extend(collect_kinds(column));
                    }
                }
                _ => {}
            }
        }
        kinds
    }
}
